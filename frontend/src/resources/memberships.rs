use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::ApiError;
use streamvault_shared::entities::Membership;
use streamvault_shared::protocol::{MEMBERSHIPS, ResourceEndpoint};

use super::image_failure_message;
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{ImageField, TextArea, TextField, thumbnail};
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::images::EncodedImage;
use crate::validation::{ValidationError, parse_decimal, parse_integer, required};

pub struct Memberships;

const NUMERIC_MESSAGE: &str = "Por favor ingrese valores numéricos válidos para precio y duración.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipDraft {
    pub name: String,
    pub price: String,
    /// 天数
    pub duration: String,
    pub description: String,
    pub image: Option<String>,
    pub image_content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPayload {
    pub membership_name: String,
    pub price: f64,
    pub duration: i64,
    pub description: String,
    pub imagen: Option<String>,
    pub imagen_content_type: Option<String>,
}

impl Resource for Memberships {
    type Entity = Membership;
    type Draft = MembershipDraft;
    type Payload = MembershipPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = MEMBERSHIPS;
    const MESSAGES: Messages = Messages {
        created: "Membresía creada",
        updated: "Membresía actualizada",
        deleted: "Membresía eliminada",
        confirm_delete: "¿Estás seguro de eliminar esta membresía?",
    };

    fn id(entity: &Membership) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Membership) -> MembershipDraft {
        MembershipDraft {
            name: entity.membership_name.clone(),
            price: entity.price.to_string(),
            duration: entity.duration.to_string(),
            description: entity.description.clone(),
            image: entity.imagen.clone(),
            image_content_type: entity.imagen_content_type.clone(),
        }
    }

    fn to_payload(
        draft: &MembershipDraft,
        _mode: FormMode,
    ) -> Result<MembershipPayload, ValidationError> {
        Ok(MembershipPayload {
            membership_name: required("name", &draft.name, "El nombre es obligatorio")?,
            price: parse_decimal("price", &draft.price, NUMERIC_MESSAGE)?,
            duration: parse_integer("duration", &draft.duration, NUMERIC_MESSAGE)?,
            description: draft.description.trim().to_string(),
            imagen: draft.image.clone(),
            imagen_content_type: draft.image_content_type.clone(),
        })
    }

    fn failure_message(draft: &MembershipDraft, err: &ApiError) -> String {
        image_failure_message(draft.image.is_some(), err)
    }
}

impl AdminView for Memberships {
    const TITLE: &'static str = "Membresías";
    const SINGULAR: &'static str = "Membresía";
    const COLUMNS: &'static [&'static str] =
        &["Imagen", "Nombre", "Precio", "Duración", "Descripción"];

    fn cells(entity: &Membership) -> Vec<AnyView> {
        vec![
            thumbnail(entity.imagen.as_deref(), entity.imagen_content_type.as_deref()),
            text_cell(entity.membership_name.clone()),
            text_cell(format!("${:.2}", entity.price)),
            text_cell(format!("{} días", entity.duration)),
            text_cell(entity.description.clone()),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let current = Signal::derive(move || {
            screen.draft.with(|d| {
                d.image
                    .clone()
                    .map(|data| (data, d.image_content_type.clone().unwrap_or_default()))
            })
        });
        let on_select = move |image: EncodedImage| {
            screen.update_draft(|d| {
                d.image = Some(image.data);
                d.image_content_type = Some(image.content_type);
            });
        };
        view! {
            <TextField
                label="Nombre"
                placeholder="Ej. Premium"
                required=true
                bind=screen.bind("name", |d| d.name.clone(), |d, v| d.name = v)
            />
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Precio"
                    placeholder="0.00"
                    required=true
                    bind=screen.bind("price", |d| d.price.clone(), |d, v| d.price = v)
                />
                <TextField
                    label="Duración (días)"
                    input_type="number"
                    required=true
                    bind=screen.bind("duration", |d| d.duration.clone(), |d, v| d.duration = v)
                />
            </div>
            <TextArea
                label="Descripción"
                bind=screen.bind("description", |d| d.description.clone(), |d, v| d.description = v)
            />
            <ImageField label="Imagen" current=current on_select=on_select />
        }
        .into_any()
    }
}
