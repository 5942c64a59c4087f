use std::collections::BTreeSet;

use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::{City, Customer, DocumentType, FilmGenre, Sex, User};
use streamvault_shared::protocol::{
    CITIES, CUSTOMERS, DOCUMENT_TYPES, FILM_GENRES, ResourceEndpoint, SEXES, USERS,
};
use streamvault_shared::{ApiError, IdRef};

use super::{genre_ids, genre_options, id_value};
use crate::api::{Access, ApiClient};
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{CheckboxGroup, SelectField, TextField};
use crate::crud::{CrudScreen, FormMode, Messages, Resource, toggle};
use crate::validation::{ValidationError, optional, required, selected_id};

pub struct Customers;

const MISSING_REFERENCES: &str = "Por favor complete todos los campos obligatorios";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub document_number: String,
    pub first_name: String,
    pub second_name: String,
    pub first_last_name: String,
    pub second_last_name: String,
    pub user_id: String,
    pub document_type_id: String,
    pub sex_id: String,
    pub city_id: String,
    pub genre_ids: BTreeSet<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub document_number: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_las_name: String,
    pub second_last_name: Option<String>,
    pub user: IdRef,
    pub document_type: IdRef,
    pub sex: IdRef,
    pub cities: IdRef,
    pub film_genres: Vec<IdRef>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerLookups {
    pub users: Vec<User>,
    pub document_types: Vec<DocumentType>,
    pub sexes: Vec<Sex>,
    pub cities: Vec<City>,
    pub genres: Vec<FilmGenre>,
}

impl Resource for Customers {
    type Entity = Customer;
    type Draft = CustomerDraft;
    type Payload = CustomerPayload;
    type Lookups = CustomerLookups;

    const ENDPOINT: ResourceEndpoint = CUSTOMERS;
    const MESSAGES: Messages = Messages {
        created: "Cliente creado",
        updated: "Cliente actualizado",
        deleted: "Cliente eliminado",
        confirm_delete: "¿Estás seguro de eliminar este cliente?",
    };

    fn id(entity: &Customer) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Customer) -> CustomerDraft {
        CustomerDraft {
            document_number: entity.document_number.clone(),
            first_name: entity.first_name.clone(),
            second_name: entity.second_name.clone().unwrap_or_default(),
            first_last_name: entity.first_las_name.clone(),
            second_last_name: entity.second_last_name.clone().unwrap_or_default(),
            user_id: id_value(entity.user.as_ref().map(|u| u.id)),
            document_type_id: id_value(entity.document_type.as_ref().map(|d| d.id)),
            sex_id: id_value(entity.sex.as_ref().map(|s| s.id)),
            city_id: id_value(entity.cities.as_ref().map(|c| c.id)),
            genre_ids: genre_ids(&entity.film_genres),
        }
    }

    /// 四个下拉框任一未选都以同一条表单级提示拒绝
    fn to_payload(draft: &CustomerDraft, _mode: FormMode) -> Result<CustomerPayload, ValidationError> {
        let references = (
            selected_id(&draft.user_id),
            selected_id(&draft.document_type_id),
            selected_id(&draft.sex_id),
            selected_id(&draft.city_id),
        );
        let (Some(user), Some(document_type), Some(sex), Some(city)) = references else {
            return Err(ValidationError::form(MISSING_REFERENCES));
        };
        Ok(CustomerPayload {
            document_number: required(
                "document_number",
                &draft.document_number,
                "El documento es obligatorio",
            )?,
            first_name: required("first_name", &draft.first_name, "El nombre es obligatorio")?,
            second_name: optional(&draft.second_name),
            first_las_name: required(
                "first_last_name",
                &draft.first_last_name,
                "El apellido es obligatorio",
            )?,
            second_last_name: optional(&draft.second_last_name),
            user: IdRef::from(user),
            document_type: IdRef::from(document_type),
            sex: IdRef::from(sex),
            cities: IdRef::from(city),
            film_genres: draft.genre_ids.iter().copied().map(IdRef::from).collect(),
        })
    }

    async fn load_lookups(client: &ApiClient) -> Result<CustomerLookups, ApiError> {
        Ok(CustomerLookups {
            users: client.find_all(&USERS, Access::Authenticated).await?,
            document_types: client.find_all(&DOCUMENT_TYPES, Access::Authenticated).await?,
            sexes: client.find_all(&SEXES, Access::Authenticated).await?,
            cities: client.find_all(&CITIES, Access::Authenticated).await?,
            genres: client.find_all(&FILM_GENRES, Access::Authenticated).await?,
        })
    }
}

impl AdminView for Customers {
    const TITLE: &'static str = "Clientes";
    const SINGULAR: &'static str = "Cliente";
    const COLUMNS: &'static [&'static str] = &["Nombre Completo", "Documento", "Usuario", "Ciudad"];

    fn cells(entity: &Customer) -> Vec<AnyView> {
        let full_name = [
            Some(entity.first_name.as_str()),
            entity.second_name.as_deref(),
            Some(entity.first_las_name.as_str()),
            entity.second_last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        let document = match &entity.document_type {
            Some(kind) => format!("{} {}", kind.initials, entity.document_number),
            None => entity.document_number.clone(),
        };
        vec![
            text_cell(full_name),
            text_cell(document),
            text_cell(entity.user.as_ref().map(|u| u.login.clone()).unwrap_or_default()),
            text_cell(entity.cities.as_ref().map(|c| c.name.clone()).unwrap_or_default()),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let options = move |pick: fn(&CustomerLookups) -> Vec<(i64, String)>| {
            Signal::derive(move || screen.lookups.with(pick))
        };
        let users = options(|l| l.users.iter().map(|u| (u.id, u.login.clone())).collect());
        let document_types = options(|l| {
            l.document_types
                .iter()
                .map(|d| (d.id, format!("{} - {}", d.initials, d.document_name)))
                .collect()
        });
        let sexes = options(|l| l.sexes.iter().map(|s| (s.id, s.sex_name.clone())).collect());
        let cities = options(|l| l.cities.iter().map(|c| (c.id, c.name.clone())).collect());
        let genres = options(|l| genre_options(&l.genres));
        let selected = Signal::derive(move || screen.draft.with(|d| d.genre_ids.clone()));

        view! {
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Número de documento"
                    required=true
                    bind=screen.bind(
                        "document_number",
                        |d| d.document_number.clone(),
                        |d, v| d.document_number = v,
                    )
                />
                <SelectField
                    label="Tipo de documento"
                    placeholder="Selecciona"
                    options=document_types
                    bind=screen.bind(
                        "document_type_id",
                        |d| d.document_type_id.clone(),
                        |d, v| d.document_type_id = v,
                    )
                />
                <TextField
                    label="Primer nombre"
                    required=true
                    bind=screen.bind("first_name", |d| d.first_name.clone(), |d, v| d.first_name = v)
                />
                <TextField
                    label="Segundo nombre"
                    bind=screen.bind("second_name", |d| d.second_name.clone(), |d, v| d.second_name = v)
                />
                <TextField
                    label="Primer apellido"
                    required=true
                    bind=screen.bind(
                        "first_last_name",
                        |d| d.first_last_name.clone(),
                        |d, v| d.first_last_name = v,
                    )
                />
                <TextField
                    label="Segundo apellido"
                    bind=screen.bind(
                        "second_last_name",
                        |d| d.second_last_name.clone(),
                        |d, v| d.second_last_name = v,
                    )
                />
                <SelectField
                    label="Usuario"
                    placeholder="Selecciona un usuario"
                    options=users
                    bind=screen.bind("user_id", |d| d.user_id.clone(), |d, v| d.user_id = v)
                />
                <SelectField
                    label="Sexo"
                    placeholder="Selecciona"
                    options=sexes
                    bind=screen.bind("sex_id", |d| d.sex_id.clone(), |d, v| d.sex_id = v)
                />
                <SelectField
                    label="Ciudad"
                    placeholder="Selecciona una ciudad"
                    options=cities
                    bind=screen.bind("city_id", |d| d.city_id.clone(), |d, v| d.city_id = v)
                />
            </div>
            <CheckboxGroup
                label="Géneros favoritos"
                options=genres
                selected=selected
                on_toggle=move |id: i64| screen.update_draft(|d| toggle(&mut d.genre_ids, id))
            />
        }
        .into_any()
    }
}
