use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::Department;
use streamvault_shared::protocol::{DEPARTMENTS, ResourceEndpoint};

use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::TextField;
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::validation::{ValidationError, required};

pub struct Departments;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentDraft {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    pub departament_name: String,
}

impl Resource for Departments {
    type Entity = Department;
    type Draft = DepartmentDraft;
    type Payload = DepartmentPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = DEPARTMENTS;
    const MESSAGES: Messages = Messages {
        created: "Departamento creado",
        updated: "Departamento actualizado",
        deleted: "Departamento eliminado",
        confirm_delete: "¿Estás seguro de eliminar este departamento?",
    };

    fn id(entity: &Department) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Department) -> DepartmentDraft {
        DepartmentDraft {
            name: entity.departament_name.clone(),
        }
    }

    fn to_payload(draft: &DepartmentDraft, _mode: FormMode) -> Result<DepartmentPayload, ValidationError> {
        Ok(DepartmentPayload {
            departament_name: required("name", &draft.name, "El nombre es obligatorio")?,
        })
    }
}

impl AdminView for Departments {
    const TITLE: &'static str = "Departamentos";
    const SINGULAR: &'static str = "Departamento";
    const COLUMNS: &'static [&'static str] = &["Nombre"];

    fn cells(entity: &Department) -> Vec<AnyView> {
        vec![text_cell(entity.departament_name.clone())]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        view! {
            <TextField
                label="Nombre"
                placeholder="Ej. Antioquia"
                required=true
                bind=screen.bind("name", |d| d.name.clone(), |d, v| d.name = v)
            />
        }
        .into_any()
    }
}
