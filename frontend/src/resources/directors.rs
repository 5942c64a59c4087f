use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::ApiError;
use streamvault_shared::entities::Director;
use streamvault_shared::protocol::{DIRECTORS, ResourceEndpoint};

use super::image_failure_message;
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{ImageField, TextField, thumbnail};
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::images::EncodedImage;
use crate::validation::{ValidationError, optional, required};

pub struct Directors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorDraft {
    pub name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`，来自日期输入框
    pub birth_date: String,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPayload {
    pub name_director: String,
    pub las_name_director: String,
    pub yearbirth: Option<String>,
    pub picture: Option<String>,
    pub picture_content_type: Option<String>,
}

impl Resource for Directors {
    type Entity = Director;
    type Draft = DirectorDraft;
    type Payload = DirectorPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = DIRECTORS;
    const MESSAGES: Messages = Messages {
        created: "Director creado",
        updated: "Director actualizado",
        deleted: "Director eliminado",
        confirm_delete: "¿Estás seguro de eliminar este director?",
    };

    fn id(entity: &Director) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Director) -> DirectorDraft {
        DirectorDraft {
            name: entity.name_director.clone(),
            last_name: entity.las_name_director.clone(),
            birth_date: entity.yearbirth.clone(),
            picture: entity.picture.clone(),
            picture_content_type: entity.picture_content_type.clone(),
        }
    }

    fn to_payload(draft: &DirectorDraft, _mode: FormMode) -> Result<DirectorPayload, ValidationError> {
        Ok(DirectorPayload {
            name_director: required("name", &draft.name, "El nombre es obligatorio")?,
            las_name_director: required("last_name", &draft.last_name, "El apellido es obligatorio")?,
            yearbirth: optional(&draft.birth_date),
            picture: draft.picture.clone(),
            picture_content_type: draft.picture_content_type.clone(),
        })
    }

    fn failure_message(draft: &DirectorDraft, err: &ApiError) -> String {
        image_failure_message(draft.picture.is_some(), err)
    }
}

impl AdminView for Directors {
    const TITLE: &'static str = "Directores";
    const SINGULAR: &'static str = "Director";
    const COLUMNS: &'static [&'static str] = &["Foto", "Nombre", "Apellido", "Fecha Nac."];

    fn cells(entity: &Director) -> Vec<AnyView> {
        vec![
            thumbnail(entity.picture.as_deref(), entity.picture_content_type.as_deref()),
            text_cell(entity.name_director.clone()),
            text_cell(entity.las_name_director.clone()),
            text_cell(entity.yearbirth.clone()),
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
            <TextField
                label="Fecha de nacimiento"
                input_type="date"
                bind=screen.bind("birth_date", |d| d.birth_date.clone(), |d, v| d.birth_date = v)
            />
            <ImageField label="Foto" current=current on_select=on_select />
        }
        .into_any()
    }
}
