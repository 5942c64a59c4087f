use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="hero min-h-[60vh]">
                <div class="hero-content text-center">
                    <div>
                        <h1 class="text-6xl font-bold mb-4">"404"</h1>
                        <p class="text-base-content/70 mb-6">"La página que buscas no existe."</p>
                        <Link to="/" class="btn btn-primary">"Volver al inicio"</Link>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
