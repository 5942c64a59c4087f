use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::auth::use_auth;
use crate::catalog::{Catalog, SearchFilter, SortBy};
use crate::components::layout::Layout;
use crate::components::movie_card::MovieRow;
use crate::notify::use_toaster;
use crate::web::router::Link;

/// 登录后首页展示的目录行
#[component]
fn CatalogRows() -> impl IntoView {
    let catalog = Catalog::new(use_client(), use_toaster());
    spawn_local(async move { catalog.load().await });

    let sorted = move |sort: SortBy| {
        let filter = SearchFilter {
            sort,
            ..Default::default()
        };
        catalog.entries.with(|entries| filter.apply(entries))
    };

    move || {
        if catalog.loading.get() {
            return view! {
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        if catalog.entries.with(Vec::is_empty) {
            return view! {
                <p class="text-center text-base-content/60 py-12">"Aún no hay contenido disponible."</p>
            }
            .into_any();
        }
        view! {
            <MovieRow title="Tendencias Ahora" entries=sorted(SortBy::Rating) />
            <MovieRow title="Recién Añadidas" entries=sorted(SortBy::Year) />
        }
        .into_any()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Layout>
            <div class="hero min-h-[60vh] bg-gradient-to-r from-base-300 to-base-100">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-4xl md:text-6xl font-bold mb-4">"Películas y series sin límites"</h1>
                        <p class="text-base-content/70 text-lg mb-8">
                            "Descubre estrenos, clásicos y contenido exclusivo en StreamVault."
                        </p>
                        <div class="flex justify-center gap-3">
                            <Link to="/search" class="btn btn-primary">"Explorar catálogo"</Link>
                            <Link to="/plans" class="btn btn-outline">"Ver planes"</Link>
                        </div>
                    </div>
                </div>
            </div>
            <div class="container mx-auto px-4 lg:px-8 py-10">
                <Show when=move || auth.is_authenticated()>
                    <CatalogRows />
                </Show>
            </div>
        </Layout>
    }
}
