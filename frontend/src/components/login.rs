use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::fields::{Binding, TextField};
use crate::components::layout::Layout;
use crate::forms::LoginForm;
use crate::validation::FieldErrors;
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (show_password, set_show_password) = signal(false);

    // 已登录（包括刚刚登录成功）时回到被拦截前的地址
    Effect::new(move |_| {
        if auth.is_authenticated() {
            router.replace(&router.take_return_target());
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = match form.get_untracked().credentials() {
            Ok(credentials) => credentials,
            Err(err) => {
                errors.set(err.into_field_errors());
                return;
            }
        };
        set_is_submitting.set(true);
        spawn_local(async move {
            // 失败时的通知由会话存储发出
            let _ = auth.login(&credentials).await;
            set_is_submitting.try_set(false);
        });
    };

    let identifier = Binding::new(
        form,
        errors,
        "identifier",
        |f: &LoginForm| f.identifier.clone(),
        |f, v| f.identifier = v,
    );
    let password = Binding::new(
        form,
        errors,
        "password",
        |f: &LoginForm| f.password.clone(),
        |f, v| f.password = v,
    );

    view! {
        <Layout>
            <div class="hero min-h-[80vh]">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">"Bienvenido de vuelta"</h1>
                        <p class="text-base-content/70">"Inicia sesión en tu cuenta de StreamVault"</p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <TextField label="Correo o Usuario" placeholder="Correo o Usuario" required=true bind=identifier />
                            {move || {
                                let input_type = if show_password.get() { "text" } else { "password" };
                                view! {
                                    <TextField
                                        label="Contraseña"
                                        input_type=input_type
                                        placeholder="Contraseña"
                                        required=true
                                        bind=password
                                    />
                                }
                            }}
                            <div class="flex justify-between items-center">
                                <label class="label cursor-pointer gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-xs"
                                        prop:checked=move || show_password.get()
                                        on:change=move |_| set_show_password.update(|v| *v = !*v)
                                    />
                                    <span class="label-text text-xs">"Mostrar contraseña"</span>
                                </label>
                                <Link to="/forgot-password" class="link link-primary text-xs">
                                    "¿Olvidaste tu contraseña?"
                                </Link>
                            </div>
                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() { "Iniciando..." } else { "Iniciar Sesión" }}
                                </button>
                            </div>
                            <p class="text-center text-sm text-base-content/70 mt-4">
                                "¿No tienes cuenta? "
                                <Link to="/register" class="link link-primary font-medium">"Regístrate"</Link>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
