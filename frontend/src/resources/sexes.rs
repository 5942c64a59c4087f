use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::Sex;
use streamvault_shared::protocol::{ResourceEndpoint, SEXES};

use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::TextField;
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::validation::{ValidationError, required};

pub struct Sexes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SexDraft {
    pub name: String,
}

/// 更新时 id 由客户端写入请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SexPayload {
    pub sex_name: String,
}

impl Resource for Sexes {
    type Entity = Sex;
    type Draft = SexDraft;
    type Payload = SexPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = SEXES;
    const MESSAGES: Messages = Messages {
        created: "Sexo creado",
        updated: "Sexo actualizado",
        deleted: "Sexo eliminado",
        confirm_delete: "¿Estás seguro de eliminar este registro?",
    };

    fn id(entity: &Sex) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Sex) -> SexDraft {
        SexDraft {
            name: entity.sex_name.clone(),
        }
    }

    fn to_payload(draft: &SexDraft, _mode: FormMode) -> Result<SexPayload, ValidationError> {
        Ok(SexPayload {
            sex_name: required("name", &draft.name, "El nombre es obligatorio")?,
        })
    }
}

impl AdminView for Sexes {
    const TITLE: &'static str = "Sexos";
    const SINGULAR: &'static str = "Sexo";
    const COLUMNS: &'static [&'static str] = &["Nombre"];

    fn cells(entity: &Sex) -> Vec<AnyView> {
        vec![text_cell(entity.sex_name.clone())]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        view! {
            <TextField
                label="Nombre"
                placeholder="Ej. Femenino"
                required=true
                bind=screen.bind("name", |d| d.name.clone(), |d, v| d.name = v)
            />
        }
        .into_any()
    }
}
