use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::notify::use_toaster;

struct Plan {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [(&'static str, bool)],
    cta: &'static str,
    highlight: bool,
}

const PLANS: [Plan; 2] = [
    Plan {
        name: "Gratuito",
        price: "$0",
        description: "Acceso básico al catálogo",
        features: &[
            ("Catálogo limitado", true),
            ("Calidad SD", true),
            ("1 dispositivo", true),
            ("Con anuncios", true),
            ("Contenido premium", false),
            ("Descargas offline", false),
        ],
        cta: "Empezar Gratis",
        highlight: false,
    },
    Plan {
        name: "Premium",
        price: "$12.99",
        description: "La experiencia completa sin límites",
        features: &[
            ("Catálogo completo", true),
            ("Calidad 4K HDR", true),
            ("4 dispositivos", true),
            ("Sin anuncios", true),
            ("Contenido premium", true),
            ("Descargas offline", true),
        ],
        cta: "Obtener Premium",
        highlight: true,
    },
];

#[component]
pub fn PlansPage() -> impl IntoView {
    let toaster = use_toaster();

    let cards = PLANS
        .iter()
        .map(|plan| {
            let features = plan
                .features
                .iter()
                .map(|(text, included)| {
                    let (mark, class) = if *included {
                        ("✓", "text-base-content")
                    } else {
                        ("✗", "text-base-content/40")
                    };
                    view! {
                        <li class=format!("flex items-center gap-3 text-sm {class}")>
                            <span>{mark}</span>
                            <span>{*text}</span>
                        </li>
                    }
                })
                .collect_view();
            let card_class = if plan.highlight {
                "card bg-base-100 shadow-xl border-2 border-primary"
            } else {
                "card bg-base-100 shadow-xl"
            };
            view! {
                <div class=card_class>
                    <div class="card-body">
                        {plan.highlight.then(|| view! { <div class="badge badge-primary">"Más Popular"</div> })}
                        <h3 class="card-title text-xl">{plan.name}</h3>
                        <div>
                            <span class="text-4xl font-bold">{plan.price}</span>
                            <span class="text-sm text-base-content/70">"/mes"</span>
                        </div>
                        <p class="text-sm text-base-content/70">{plan.description}</p>
                        <ul class="space-y-3 my-4">{features}</ul>
                        <button
                            class=if plan.highlight { "btn btn-primary w-full" } else { "btn btn-outline w-full" }
                            on:click=move |_| {
                                toaster.success(
                                    "Demo",
                                    Some("Los pagos se habilitarán próximamente.".to_string()),
                                )
                            }
                        >
                            {plan.cta}
                        </button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Layout>
            <div class="container mx-auto px-4 lg:px-8 py-16">
                <div class="text-center mb-14">
                    <h1 class="text-3xl md:text-5xl font-bold mb-4">"Elige tu plan perfecto"</h1>
                    <p class="text-base-content/70 text-lg max-w-xl mx-auto">
                        "Disfruta del mejor contenido sin interrupciones. Cancela cuando quieras."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-3xl mx-auto">{cards}</div>
            </div>
        </Layout>
    }
}
