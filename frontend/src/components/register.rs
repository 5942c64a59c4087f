use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::auth::use_auth;
use crate::components::fields::{Binding, SelectField, TextField};
use crate::components::layout::Layout;
use crate::forms::{RegisterForm, RegisterLookups};
use crate::notify::use_toaster;
use crate::validation::FieldErrors;
use crate::web::router::{Link, use_router};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let client = StoredValue::new(use_client());

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let lookups = RwSignal::new(RegisterLookups::default());
    let (is_submitting, set_is_submitting) = signal(false);

    spawn_local(async move {
        let Some(client) = client.try_get_value() else {
            return;
        };
        match RegisterLookups::load(&client).await {
            Ok(loaded) => {
                lookups.try_set(loaded);
            }
            Err(err) => toaster.error("Error al cargar los datos", Some(err.message)),
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.get_untracked().to_request() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                toaster.error("Revisa el formulario", None);
                return;
            }
        };
        set_is_submitting.set(true);
        spawn_local(async move {
            if auth.register(&request).await.is_ok() {
                router.navigate("/login");
            }
            set_is_submitting.try_set(false);
        });
    };

    let bind = move |field: &'static str,
                     read: fn(&RegisterForm) -> String,
                     write: fn(&mut RegisterForm, String)| {
        Binding::new(form, errors, field, read, write)
    };
    let document_types = Signal::derive(move || {
        lookups.with(|l| {
            l.document_types
                .iter()
                .map(|d| (d.id, format!("{} - {}", d.initials, d.document_name)))
                .collect::<Vec<_>>()
        })
    });
    let sexes = Signal::derive(move || {
        lookups.with(|l| l.sexes.iter().map(|s| (s.id, s.sex_name.clone())).collect::<Vec<_>>())
    });
    let cities = Signal::derive(move || {
        lookups.with(|l| l.cities.iter().map(|c| (c.id, c.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <Layout>
            <div class="flex justify-center px-4 py-12">
                <div class="card w-full max-w-2xl shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="text-center mb-4">
                            <h1 class="text-3xl font-bold">"Crea tu cuenta"</h1>
                            <p class="text-base-content/70">"Únete a StreamVault"</p>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <TextField label="Usuario" required=true bind=bind("username", |f| f.username.clone(), |f, v| f.username = v) />
                            <TextField label="Correo" input_type="email" required=true bind=bind("email", |f| f.email.clone(), |f, v| f.email = v) />
                            <TextField label="Contraseña" input_type="password" required=true bind=bind("password", |f| f.password.clone(), |f, v| f.password = v) />
                            <TextField label="Número de documento" required=true bind=bind("document_number", |f| f.document_number.clone(), |f, v| f.document_number = v) />
                            <TextField label="Primer nombre" required=true bind=bind("first_name", |f| f.first_name.clone(), |f, v| f.first_name = v) />
                            <TextField label="Segundo nombre" bind=bind("second_name", |f| f.second_name.clone(), |f, v| f.second_name = v) />
                            <TextField label="Primer apellido" required=true bind=bind("first_last_name", |f| f.first_last_name.clone(), |f, v| f.first_last_name = v) />
                            <TextField label="Segundo apellido" bind=bind("second_last_name", |f| f.second_last_name.clone(), |f, v| f.second_last_name = v) />
                            <SelectField
                                label="Tipo de documento"
                                placeholder="Selecciona"
                                options=document_types
                                bind=bind("document_type_id", |f| f.document_type_id.clone(), |f, v| f.document_type_id = v)
                            />
                            <SelectField
                                label="Sexo"
                                placeholder="Selecciona"
                                options=sexes
                                bind=bind("sex_id", |f| f.sex_id.clone(), |f, v| f.sex_id = v)
                            />
                            <SelectField
                                label="Ciudad"
                                placeholder="Selecciona"
                                options=cities
                                bind=bind("city_id", |f| f.city_id.clone(), |f, v| f.city_id = v)
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Registrando..." } else { "Registrarse" }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-4">
                            "¿Ya tienes cuenta? "
                            <Link to="/login" class="link link-primary font-medium">"Inicia sesión"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
