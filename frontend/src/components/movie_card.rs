use leptos::prelude::*;

use crate::catalog::CatalogEntry;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn MovieCard(entry: CatalogEntry) -> impl IntoView {
    let initial = entry.title.chars().next().unwrap_or('?').to_string();
    let year = entry.year.map(|y| y.to_string()).unwrap_or_default();

    view! {
        <Link to=AppRoute::MovieDetail(entry.id.to_string()).to_path() class="group block">
            <div class="card bg-base-200 shadow-md overflow-hidden transition-transform group-hover:scale-105">
                <figure class="aspect-[2/3] bg-gradient-to-br from-primary/30 to-base-300">
                    <span class="text-5xl font-bold text-base-content/40">{initial}</span>
                </figure>
                <div class="p-3">
                    <h3 class="font-semibold text-sm truncate">{entry.title}</h3>
                    <div class="flex items-center justify-between mt-1 text-xs text-base-content/70">
                        <span>{year}</span>
                        <span>"★ " {format!("{:.1}", entry.rating)}</span>
                    </div>
                </div>
            </div>
        </Link>
    }
}

/// 首页的一行内容
#[component]
pub fn MovieRow(#[prop(into)] title: String, entries: Vec<CatalogEntry>) -> impl IntoView {
    let cards = entries
        .into_iter()
        .map(|entry| view! { <div class="w-40 flex-none"><MovieCard entry=entry /></div> })
        .collect_view();

    view! {
        <section class="mb-10">
            <h2 class="text-xl font-bold mb-4">{title}</h2>
            <div class="flex gap-4 overflow-x-auto pb-2">{cards}</div>
        </section>
    }
}
