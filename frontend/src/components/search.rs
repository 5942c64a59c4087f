use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::catalog::{Catalog, SearchFilter, SortBy, genre_choices, year_choices};
use crate::components::layout::Layout;
use crate::components::movie_card::MovieCard;
use crate::notify::use_toaster;

#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = Catalog::new(use_client(), use_toaster());
    let filter = RwSignal::new(SearchFilter::default());
    spawn_local(async move { catalog.load().await });

    let results = Memo::new(move |_| {
        filter.with(|f| catalog.entries.with(|entries| f.apply(entries)))
    });
    let genres = Memo::new(move |_| catalog.entries.with(|e| genre_choices(e)));
    let years = Memo::new(move |_| catalog.entries.with(|e| year_choices(e)));

    let genre_button = move |label: String, value: Option<String>| {
        let selected = value.clone();
        let class = move || {
            if filter.with(|f| f.genre == selected) {
                "btn btn-sm btn-primary"
            } else {
                "btn btn-sm btn-ghost"
            }
        };
        view! {
            <button
                type="button"
                class=class
                on:click=move |_| filter.update(|f| f.genre = value.clone())
            >
                {label}
            </button>
        }
    };

    let grid = move || {
        if catalog.loading.get() {
            return view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        let entries = results.get();
        if entries.is_empty() {
            return view! {
                <div class="text-center py-16">
                    <p class="text-lg font-semibold">"No se encontraron resultados"</p>
                    <p class="text-base-content/60">"Intenta con otros filtros o búsqueda"</p>
                </div>
            }
            .into_any();
        }
        let cards = entries
            .into_iter()
            .map(|entry| view! { <MovieCard entry=entry /> })
            .collect_view();
        view! {
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">{cards}</div>
        }
        .into_any()
    };

    view! {
        <Layout>
            <div class="container mx-auto px-4 lg:px-8 py-10">
                <h1 class="text-3xl font-bold mb-6">"Explorar"</h1>
                <input
                    type="search"
                    class="input input-bordered w-full mb-4"
                    placeholder="Buscar películas o series..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <div class="flex flex-wrap gap-2 mb-4">
                    {genre_button("Todos".to_string(), None)}
                    {move || {
                        genres
                            .get()
                            .into_iter()
                            .map(|g| genre_button(g.clone(), Some(g)))
                            .collect_view()
                    }}
                </div>
                <div class="flex flex-wrap gap-3 mb-8">
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            let year = event_target_value(&ev).parse().ok();
                            filter.update(|f| f.year = year);
                        }
                    >
                        <option value="" selected=move || filter.with(|f| f.year.is_none())>
                            "Todos los años"
                        </option>
                        {move || {
                            years
                                .get()
                                .into_iter()
                                .map(|y| {
                                    view! {
                                        <option
                                            value=y.to_string()
                                            selected=move || filter.with(|f| f.year == Some(y))
                                        >
                                            {y.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            let sort = SortBy::parse(&event_target_value(&ev));
                            filter.update(|f| f.sort = sort);
                        }
                    >
                        {SortBy::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option
                                        value=s.as_str()
                                        selected=move || filter.with(|f| f.sort == s)
                                    >
                                        {format!("Ordenar: {}", s.label())}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                {grid}
            </div>
        </Layout>
    }
}
