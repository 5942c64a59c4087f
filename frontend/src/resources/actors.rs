use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::ApiError;
use streamvault_shared::entities::Actor;
use streamvault_shared::protocol::{ACTORS, ResourceEndpoint};

use super::image_failure_message;
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{ImageField, TextField, thumbnail};
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::images::EncodedImage;
use crate::validation::{ValidationError, required};

pub struct Actors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorDraft {
    pub name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorPayload {
    pub name_actor: String,
    pub last_name_actor: String,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

impl Resource for Actors {
    type Entity = Actor;
    type Draft = ActorDraft;
    type Payload = ActorPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = ACTORS;
    const MESSAGES: Messages = Messages {
        created: "Actor creado",
        updated: "Actor actualizado",
        deleted: "Actor eliminado",
        confirm_delete: "¿Estás seguro de eliminar este actor?",
    };

    fn id(entity: &Actor) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Actor) -> ActorDraft {
        ActorDraft {
            name: entity.name_actor.clone(),
            last_name: entity.last_name_actor.clone(),
            picture: entity.picture.clone(),
            picture_content_type: entity.picture_content_type.clone(),
        }
    }

    fn to_payload(draft: &ActorDraft, _mode: FormMode) -> Result<ActorPayload, ValidationError> {
        Ok(ActorPayload {
            name_actor: required("name", &draft.name, "El nombre es obligatorio")?,
            last_name_actor: required("last_name", &draft.last_name, "El apellido es obligatorio")?,
            picture: draft.picture.clone(),
            picture_content_type: draft.picture_content_type.clone(),
        })
    }

    fn failure_message(draft: &ActorDraft, err: &ApiError) -> String {
        image_failure_message(draft.picture.is_some(), err)
    }
}

impl AdminView for Actors {
    const TITLE: &'static str = "Actores";
    const SINGULAR: &'static str = "Actor";
    const COLUMNS: &'static [&'static str] = &["Foto", "Nombre", "Apellido"];

    fn cells(entity: &Actor) -> Vec<AnyView> {
        vec![
            thumbnail(entity.picture.as_deref(), entity.picture_content_type.as_deref()),
            text_cell(entity.name_actor.clone()),
            text_cell(entity.last_name_actor.clone()),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let current = Signal::derive(move || {
            screen.draft.with(|d| {
                d.picture
                    .clone()
                    .map(|data| (data, d.picture_content_type.clone().unwrap_or_default()))
            })
        });
        let on_select = move |image: EncodedImage| {
            screen.update_draft(|d| {
                d.picture = Some(image.data);
                d.picture_content_type = Some(image.content_type);
            });
        };
        view! {
            <TextField
                label="Nombre"
                required=true
                bind=screen.bind("name", |d| d.name.clone(), |d, v| d.name = v)
            />
            <TextField
                label="Apellido"
                required=true
                bind=screen.bind("last_name", |d| d.last_name.clone(), |d, v| d.last_name = v)
            />
            <ImageField label="Foto" current=current on_select=on_select />
        }
        .into_any()
    }
}
