use leptos::prelude::*;

use crate::components::fields::{Binding, TextField};
use crate::components::layout::Layout;
use crate::forms::ForgotPasswordForm;
use crate::notify::use_toaster;
use crate::validation::FieldErrors;
use crate::web::router::Link;

/// 找回密码；后端没有对应接口，只给出提示
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ForgotPasswordForm::default());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().validate() {
            Ok(email) => {
                log::info!("password reset requested for {email}");
                toaster.success(
                    "Correo enviado",
                    Some(
                        "Si la cuenta existe, recibirás instrucciones para restablecer tu contraseña."
                            .to_string(),
                    ),
                );
                form.set(ForgotPasswordForm::default());
            }
            Err(err) => errors.set(err.into_field_errors()),
        }
    };

    let email = Binding::new(
        form,
        errors,
        "email",
        |f: &ForgotPasswordForm| f.email.clone(),
        |f, v| f.email = v,
    );

    view! {
        <Layout>
            <div class="hero min-h-[70vh]">
                <div class="card w-full max-w-md shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h1 class="text-2xl font-bold text-center">"¿Olvidaste tu contraseña?"</h1>
                        <p class="text-sm text-base-content/70 text-center">
                            "Ingresa tu correo y te enviaremos instrucciones."
                        </p>
                        <TextField label="Correo" input_type="email" required=true bind=email />
                        <button class="btn btn-primary mt-4">"Enviar instrucciones"</button>
                        <Link to="/login" class="link link-primary text-sm text-center mt-2">
                            "Volver a iniciar sesión"
                        </Link>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
