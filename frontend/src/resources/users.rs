use std::collections::BTreeSet;

use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::User;
use streamvault_shared::protocol::{ResourceEndpoint, USERS};

use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::TextField;
use crate::crud::{CrudScreen, FormMode, Messages, Resource, toggle};
use crate::validation::{ValidationError, is_valid_email, optional, required};

pub struct Users;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";
const ROLES: [&str; 2] = [ROLE_ADMIN, ROLE_USER];

/// `ROLE_ADMIN` → `ADMIN`
pub fn role_label(role: &str) -> &str {
    role.strip_prefix("ROLE_").unwrap_or(role)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 编辑时留空表示不修改
    pub password: String,
    pub lang_key: String,
    pub image_url: String,
    pub activated: bool,
    pub authorities: BTreeSet<String>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            login: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            lang_key: "es".to_string(),
            image_url: String::new(),
            activated: true,
            authorities: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub lang_key: String,
    pub image_url: Option<String>,
    pub activated: bool,
    pub authorities: Vec<String>,
}

impl Resource for Users {
    type Entity = User;
    type Draft = UserDraft;
    type Payload = UserPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = USERS;
    const MESSAGES: Messages = Messages {
        created: "Usuario creado",
        updated: "Usuario actualizado",
        deleted: "Usuario eliminado",
        confirm_delete: "¿Estás seguro de eliminar este usuario?",
    };

    fn id(entity: &User) -> i64 {
        entity.id
    }

    fn draft_from(entity: &User) -> UserDraft {
        UserDraft {
            login: entity.login.clone(),
            first_name: entity.first_name.clone().unwrap_or_default(),
            last_name: entity.last_name.clone().unwrap_or_default(),
            email: entity.email.clone().unwrap_or_default(),
            password: String::new(),
            lang_key: entity.lang_key.clone().unwrap_or_else(|| "es".to_string()),
            image_url: entity.image_url.clone().unwrap_or_default(),
            activated: entity.activated,
            authorities: entity.authorities.iter().cloned().collect(),
        }
    }

    fn to_payload(draft: &UserDraft, mode: FormMode) -> Result<UserPayload, ValidationError> {
        let login = required("login", &draft.login, "El usuario es obligatorio")?;
        let email = draft.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(ValidationError::field("email", "Correo inválido"));
        }
        let password = optional(&draft.password);
        if password.is_none() && !mode.is_edit() {
            return Err(ValidationError::field(
                "password",
                "La contraseña es obligatoria para nuevos usuarios",
            ));
        }
        Ok(UserPayload {
            login,
            first_name: optional(&draft.first_name),
            last_name: optional(&draft.last_name),
            email,
            password,
            lang_key: optional(&draft.lang_key).unwrap_or_else(|| "es".to_string()),
            image_url: optional(&draft.image_url),
            activated: draft.activated,
            authorities: draft.authorities.iter().cloned().collect(),
        })
    }
}

impl AdminView for Users {
    const TITLE: &'static str = "Usuarios";
    const SINGULAR: &'static str = "Usuario";
    const COLUMNS: &'static [&'static str] =
        &["Usuario", "Nombre Completo", "Email", "Roles", "Estado"];

    fn cells(entity: &User) -> Vec<AnyView> {
        let full_name = format!(
            "{} {}",
            entity.first_name.as_deref().unwrap_or_default(),
            entity.last_name.as_deref().unwrap_or_default()
        );
        let roles = entity
            .authorities
            .iter()
            .map(|role| {
                let role = role_label(role).to_string();
                view! { <span class="badge badge-ghost badge-sm mr-1">{role}</span> }
            })
            .collect_view();
        let status = if entity.activated {
            view! { <span class="badge badge-success badge-sm">"Activo"</span> }.into_any()
        } else {
            view! { <span class="badge badge-error badge-sm">"Inactivo"</span> }.into_any()
        };
        vec![
            text_cell(entity.login.clone()),
            text_cell(full_name.trim().to_string()),
            text_cell(entity.email.clone().unwrap_or_default()),
            roles.into_any(),
            status,
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let password_label = move || {
            if screen.mode.get().is_edit() {
                "Contraseña (dejar vacío para no cambiar)"
            } else {
                "Contraseña"
            }
        };
        let roles = ROLES
            .iter()
            .map(|role| {
                let role = *role;
                view! {
                    <label class="label cursor-pointer gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm checkbox-primary"
                            prop:checked=move || screen.draft.with(|d| d.authorities.contains(role))
                            on:change=move |_| {
                                screen.update_draft(|d| toggle(&mut d.authorities, role.to_string()))
                            }
                        />
                        <span class="label-text">{role_label(role)}</span>
                    </label>
                }
            })
            .collect_view();

        view! {
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Usuario"
                    required=true
                    bind=screen.bind("login", |d| d.login.clone(), |d, v| d.login = v)
                />
                <TextField
                    label="Email"
                    input_type="email"
                    required=true
                    bind=screen.bind("email", |d| d.email.clone(), |d, v| d.email = v)
                />
                <TextField
                    label="Nombre"
                    bind=screen.bind("first_name", |d| d.first_name.clone(), |d, v| d.first_name = v)
                />
                <TextField
                    label="Apellido"
                    bind=screen.bind("last_name", |d| d.last_name.clone(), |d, v| d.last_name = v)
                />
            </div>
            {move || {
                view! {
                    <TextField
                        label=password_label()
                        input_type="password"
                        bind=screen.bind("password", |d| d.password.clone(), |d, v| d.password = v)
                    />
                }
            }}
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Idioma"
                    bind=screen.bind("lang_key", |d| d.lang_key.clone(), |d, v| d.lang_key = v)
                />
                <TextField
                    label="URL de imagen"
                    bind=screen.bind("image_url", |d| d.image_url.clone(), |d, v| d.image_url = v)
                />
            </div>
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Roles"</span>
                </label>
                <div class="flex gap-4">{roles}</div>
            </div>
            <label class="label cursor-pointer justify-start gap-2">
                <input
                    type="checkbox"
                    class="toggle toggle-success"
                    prop:checked=move || screen.draft.with(|d| d.activated)
                    on:change=move |_| screen.update_draft(|d| d.activated = !d.activated)
                />
                <span class="label-text">"Activo"</span>
            </label>
        }
        .into_any()
    }
}
