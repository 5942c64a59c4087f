use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::DocumentType;
use streamvault_shared::protocol::{DOCUMENT_TYPES, ResourceEndpoint};

use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::TextField;
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::validation::{ValidationError, required};

pub struct DocumentTypes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTypeDraft {
    pub initials: String,
    pub document_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypePayload {
    pub initials: String,
    pub document_name: String,
}

impl Resource for DocumentTypes {
    type Entity = DocumentType;
    type Draft = DocumentTypeDraft;
    type Payload = DocumentTypePayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = DOCUMENT_TYPES;
    const MESSAGES: Messages = Messages {
        created: "Tipo de documento creado",
        updated: "Tipo de documento actualizado",
        deleted: "Eliminado correctamente",
        confirm_delete: "¿Estás seguro de eliminar este tipo de documento?",
    };

    fn id(entity: &DocumentType) -> i64 {
        entity.id
    }

    fn draft_from(entity: &DocumentType) -> DocumentTypeDraft {
        DocumentTypeDraft {
            initials: entity.initials.clone(),
            document_name: entity.document_name.clone(),
        }
    }

    fn to_payload(
        draft: &DocumentTypeDraft,
        _mode: FormMode,
    ) -> Result<DocumentTypePayload, ValidationError> {
        Ok(DocumentTypePayload {
            initials: required("initials", &draft.initials, "Las siglas son obligatorias")?,
            document_name: required(
                "document_name",
                &draft.document_name,
                "El nombre es obligatorio",
            )?,
        })
    }
}

impl AdminView for DocumentTypes {
    const TITLE: &'static str = "Tipos de documento";
    const SINGULAR: &'static str = "Tipo de documento";
    const COLUMNS: &'static [&'static str] = &["Siglas", "Nombre"];

    fn cells(entity: &DocumentType) -> Vec<AnyView> {
        vec![
            text_cell(entity.initials.clone()),
            text_cell(entity.document_name.clone()),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        view! {
            <TextField
                label="Siglas"
                placeholder="Ej. CC"
                required=true
                bind=screen.bind("initials", |d| d.initials.clone(), |d, v| d.initials = v)
            />
            <TextField
                label="Nombre"
                placeholder="Ej. Cédula de ciudadanía"
                required=true
                bind=screen.bind(
                    "document_name",
                    |d| d.document_name.clone(),
                    |d, v| d.document_name = v,
                )
            />
        }
        .into_any()
    }
}
