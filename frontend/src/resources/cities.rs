use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::ApiError;
use streamvault_shared::entities::{City, Department};
use streamvault_shared::protocol::{CITIES, DEPARTMENTS, ResourceEndpoint};

use super::id_value;
use crate::api::{Access, ApiClient};
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{SelectField, TextField};
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::validation::{ValidationError, required, required_id};

pub struct Cities;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityDraft {
    pub name: String,
    pub department_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPayload {
    pub name: String,
    pub departament_id: i64,
}

impl Resource for Cities {
    type Entity = City;
    type Draft = CityDraft;
    type Payload = CityPayload;
    type Lookups = Vec<Department>;

    const ENDPOINT: ResourceEndpoint = CITIES;
    const MESSAGES: Messages = Messages {
        created: "Ciudad creada",
        updated: "Ciudad actualizada",
        deleted: "Ciudad eliminada",
        confirm_delete: "¿Estás seguro de eliminar esta ciudad?",
    };

    fn id(entity: &City) -> i64 {
        entity.id
    }

    fn draft_from(entity: &City) -> CityDraft {
        CityDraft {
            name: entity.name.clone(),
            department_id: id_value(entity.departament_id),
        }
    }

    fn to_payload(draft: &CityDraft, _mode: FormMode) -> Result<CityPayload, ValidationError> {
        Ok(CityPayload {
            name: required("name", &draft.name, "El nombre es obligatorio")?,
            departament_id: required_id(
                "department_id",
                &draft.department_id,
                "Debes seleccionar un departamento",
            )?,
        })
    }

    async fn load_lookups(client: &ApiClient) -> Result<Vec<Department>, ApiError> {
        client.find_all(&DEPARTMENTS, Access::Authenticated).await
    }
}

impl AdminView for Cities {
    const TITLE: &'static str = "Ciudades";
    const SINGULAR: &'static str = "Ciudad";
    const COLUMNS: &'static [&'static str] = &["Nombre", "Departamento"];

    fn cells(entity: &City) -> Vec<AnyView> {
        vec![
            text_cell(entity.name.clone()),
            text_cell(entity.departament_name.clone().unwrap_or_else(|| "—".to_string())),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let departments = Signal::derive(move || {
            screen.lookups.with(|list| {
                list.iter()
                    .map(|d| (d.id, d.departament_name.clone()))
                    .collect::<Vec<_>>()
            })
        });
        view! {
            <TextField
                label="Nombre"
                placeholder="Ej. Medellín"
                required=true
                bind=screen.bind("name", |d| d.name.clone(), |d, v| d.name = v)
            />
            <SelectField
                label="Departamento"
                placeholder="Selecciona un departamento"
                options=departments
                bind=screen.bind(
                    "department_id",
                    |d| d.department_id.clone(),
                    |d, v| d.department_id = v,
                )
            />
        }
        .into_any()
    }
}
