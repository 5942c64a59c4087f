use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::catalog::{Catalog, CatalogEntry, find_entry, related};
use crate::components::layout::Layout;
use crate::components::movie_card::MovieCard;
use crate::notify::use_toaster;
use crate::web::router::Link;

fn not_found() -> AnyView {
    view! {
        <div class="container mx-auto px-4 py-20 text-center">
            <p class="text-base-content/60 text-lg">"Película no encontrada"</p>
            <Link to="/" class="link link-primary mt-4 inline-block">"Volver al inicio"</Link>
        </div>
    }
    .into_any()
}

fn detail(entry: CatalogEntry, others: Vec<CatalogEntry>) -> AnyView {
    let badges = entry
        .genres
        .iter()
        .map(|g| view! { <span class="badge badge-outline">{g.clone()}</span> })
        .collect_view();
    let year = entry.year.map(|y| y.to_string()).unwrap_or_default();
    let play = match entry.trailer_url {
        Some(url) => view! {
            <a class="btn btn-primary btn-lg" href=url target="_blank" rel="noopener">"▶ Ver Ahora"</a>
        }
        .into_any(),
        None => view! { <button class="btn btn-primary btn-lg" disabled=true>"▶ Ver Ahora"</button> }
            .into_any(),
    };
    let cards = others
        .into_iter()
        .map(|e| view! { <MovieCard entry=e /> })
        .collect_view();

    view! {
        <div class="container mx-auto px-4 lg:px-8 py-10">
            <Link to="/" class="text-sm text-base-content/60 hover:text-primary mb-6 inline-block">
                "← Volver"
            </Link>
            <div class="flex flex-wrap gap-2 mb-3">{badges}</div>
            <h1 class="text-3xl md:text-5xl font-bold mb-4">{entry.title}</h1>
            <div class="flex flex-wrap gap-4 mb-6 text-sm text-base-content/70">
                <span>"★ " {format!("{:.1}", entry.rating)} "/10"</span>
                <span>{entry.duration}</span>
                <span>{year}</span>
                {entry.director.map(|d| view! { <span>"Dirección: " {d}</span> })}
            </div>
            <p class="leading-relaxed mb-8 max-w-2xl">{entry.synopsis}</p>
            {play}
            <section class="mt-16 mb-8">
                <h2 class="text-xl font-bold mb-5">"También te puede gustar"</h2>
                <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">{cards}</div>
            </section>
        </div>
    }
    .into_any()
}

/// 内容详情；路由里的 id 可能不是数字，查不到就显示未找到
#[component]
pub fn MovieDetailPage(id: String) -> impl IntoView {
    let catalog = Catalog::new(use_client(), use_toaster());
    spawn_local(async move { catalog.load().await });

    let body = move || {
        if catalog.loading.get() {
            return view! {
                <div class="flex justify-center py-20">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        catalog.entries.with(|entries| match find_entry(entries, &id) {
            Some(entry) => detail(entry.clone(), related(entries, entry.id)),
            None => not_found(),
        })
    };

    view! { <Layout>{body}</Layout> }
}
