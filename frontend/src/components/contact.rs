use leptos::prelude::*;

use crate::components::fields::{Binding, TextArea, TextField};
use crate::components::layout::Layout;
use crate::forms::ContactForm;
use crate::notify::use_toaster;
use crate::validation::FieldErrors;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().validate() {
            Ok(()) => {
                toaster.success(
                    "Mensaje enviado",
                    Some("Gracias por contactarnos. Te responderemos pronto.".to_string()),
                );
                form.set(ContactForm::default());
                errors.set(FieldErrors::new());
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let name = Binding::new(form, errors, "name", |f: &ContactForm| f.name.clone(), |f, v| f.name = v);
    let email = Binding::new(form, errors, "email", |f: &ContactForm| f.email.clone(), |f, v| f.email = v);
    let message = Binding::new(
        form,
        errors,
        "message",
        |f: &ContactForm| f.message.clone(),
        |f, v| f.message = v,
    );

    view! {
        <Layout>
            <div class="container mx-auto px-4 lg:px-8 py-12 max-w-2xl">
                <h1 class="text-3xl md:text-4xl font-bold mb-2">"Contáctanos"</h1>
                <p class="text-base-content/70 mb-8">"¿Tienes dudas? Escríbenos y te responderemos pronto."</p>
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit novalidate=true>
                        <TextField label="Nombre" bind=name />
                        <TextField label="Correo" input_type="email" bind=email />
                        <TextArea label="Mensaje" bind=message />
                        <button class="btn btn-primary mt-4">"Enviar mensaje"</button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
