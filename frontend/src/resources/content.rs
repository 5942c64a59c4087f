use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use streamvault_shared::entities::{Actor, AudiovisualContent, Director, FilmGenre};
use streamvault_shared::protocol::{ACTORS, AUDIOVISUAL, DIRECTORS, FILM_GENRES, ResourceEndpoint};
use streamvault_shared::{ApiError, IdRef};

use super::{genre_ids, genre_names, genre_options, id_value};
use crate::api::{Access, ApiClient};
use crate::cast::{CastManager, use_cast};
use crate::components::cast_panel::CastPanel;
use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::{CheckboxGroup, SelectField, TextArea, TextField};
use crate::crud::{CrudScreen, FormMode, Messages, Resource, toggle};
use crate::validation::{ValidationError, optional, parse_decimal, parse_integer, required, required_id};

pub struct Contents;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDraft {
    pub title: String,
    pub release_date: String,
    pub description: String,
    /// 分钟
    pub duration: String,
    pub age_rating: String,
    pub trailer_url: String,
    pub country: String,
    pub director_id: String,
    pub genre_ids: BTreeSet<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub tittle: String,
    pub relase_date: Option<String>,
    pub description: String,
    pub duration: i64,
    pub age_rating: f64,
    #[serde(rename = "trailerURL")]
    pub trailer_url: String,
    pub country_production: String,
    pub director_id: i64,
    pub film_genres: Vec<IdRef>,
}

/// 内容表单的参考数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentLookups {
    pub directors: Vec<Director>,
    pub genres: Vec<FilmGenre>,
    pub actors: Vec<Actor>,
}

impl Resource for Contents {
    type Entity = AudiovisualContent;
    type Draft = ContentDraft;
    type Payload = ContentPayload;
    type Lookups = ContentLookups;

    const ENDPOINT: ResourceEndpoint = AUDIOVISUAL;
    const MESSAGES: Messages = Messages {
        created: "Contenido creado",
        updated: "Contenido actualizado",
        deleted: "Contenido eliminado",
        confirm_delete: "¿Estás seguro de eliminar este contenido?",
    };

    fn id(entity: &AudiovisualContent) -> i64 {
        entity.id
    }

    fn draft_from(entity: &AudiovisualContent) -> ContentDraft {
        ContentDraft {
            title: entity.tittle.clone(),
            release_date: entity.relase_date.clone(),
            description: entity.description.clone(),
            duration: entity.duration.to_string(),
            age_rating: entity.age_rating.to_string(),
            trailer_url: entity.trailer_url.clone(),
            country: entity.country_production.clone(),
            director_id: id_value(entity.director_id),
            genre_ids: genre_ids(&entity.film_genres),
        }
    }

    fn to_payload(draft: &ContentDraft, _mode: FormMode) -> Result<ContentPayload, ValidationError> {
        let tittle = required("title", &draft.title, "El título es obligatorio")?;
        let director_id =
            required_id("director_id", &draft.director_id, "Debes seleccionar un director")?;
        if draft.genre_ids.is_empty() {
            return Err(ValidationError::field(
                "genres",
                "Debes seleccionar al menos un género",
            ));
        }
        Ok(ContentPayload {
            tittle,
            relase_date: optional(&draft.release_date),
            description: draft.description.trim().to_string(),
            duration: parse_integer("duration", &draft.duration, "La duración debe ser un número entero")?,
            age_rating: parse_decimal("age_rating", &draft.age_rating, "La clasificación debe ser numérica")?,
            trailer_url: draft.trailer_url.trim().to_string(),
            country_production: draft.country.trim().to_string(),
            director_id,
            film_genres: draft.genre_ids.iter().copied().map(IdRef::from).collect(),
        })
    }

    async fn load_lookups(client: &ApiClient) -> Result<ContentLookups, ApiError> {
        Ok(ContentLookups {
            directors: client.find_all(&DIRECTORS, Access::Authenticated).await?,
            genres: client.find_all(&FILM_GENRES, Access::Authenticated).await?,
            actors: client.find_all(&ACTORS, Access::Authenticated).await?,
        })
    }
}

impl AdminView for Contents {
    const TITLE: &'static str = "Contenido audiovisual";
    const SINGULAR: &'static str = "Contenido";
    const COLUMNS: &'static [&'static str] = &["Título", "Estreno", "Director", "Géneros"];

    fn cells(entity: &AudiovisualContent) -> Vec<AnyView> {
        vec![
            text_cell(entity.tittle.clone()),
            text_cell(entity.relase_date.clone()),
            text_cell(entity.director_name.clone().unwrap_or_else(|| "—".to_string())),
            text_cell(genre_names(&entity.film_genres)),
        ]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        let directors = Signal::derive(move || {
            screen.lookups.with(|l| {
                l.directors
                    .iter()
                    .map(|d| (d.id, d.full_name()))
                    .collect::<Vec<_>>()
            })
        });
        let genres = Signal::derive(move || screen.lookups.with(|l| genre_options(&l.genres)));
        let selected = Signal::derive(move || screen.draft.with(|d| d.genre_ids.clone()));
        let on_toggle = move |id: i64| {
            screen.update_draft(|d| toggle(&mut d.genre_ids, id));
            screen.field_errors.update(|e| {
                e.remove("genres");
            });
        };

        view! {
            <TextField
                label="Título"
                required=true
                bind=screen.bind("title", |d| d.title.clone(), |d, v| d.title = v)
            />
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Fecha de estreno"
                    input_type="date"
                    bind=screen.bind("release_date", |d| d.release_date.clone(), |d, v| d.release_date = v)
                />
                <TextField
                    label="País de producción"
                    bind=screen.bind("country", |d| d.country.clone(), |d, v| d.country = v)
                />
                <TextField
                    label="Duración (min)"
                    input_type="number"
                    bind=screen.bind("duration", |d| d.duration.clone(), |d, v| d.duration = v)
                />
                <TextField
                    label="Clasificación de edad"
                    bind=screen.bind("age_rating", |d| d.age_rating.clone(), |d, v| d.age_rating = v)
                />
            </div>
            <TextField
                label="URL del tráiler"
                input_type="url"
                bind=screen.bind("trailer_url", |d| d.trailer_url.clone(), |d, v| d.trailer_url = v)
            />
            <TextArea
                label="Descripción"
                bind=screen.bind("description", |d| d.description.clone(), |d, v| d.description = v)
            />
            <SelectField
                label="Director"
                placeholder="Selecciona un director"
                options=directors
                bind=screen.bind("director_id", |d| d.director_id.clone(), |d, v| d.director_id = v)
            />
            <CheckboxGroup
                label="Géneros"
                options=genres
                selected=selected
                on_toggle=on_toggle
                error=Signal::derive(move || screen.field_error("genres"))
            />
        }
        .into_any()
    }

    /// 演职员表面板，演员列表复用本页的参考数据
    fn extras(screen: CrudScreen<Self>) -> AnyView {
        let cast = CastManager::new(crate::api::use_client(), screen.toaster());
        provide_context(cast);
        let actors = Signal::derive(move || {
            screen.lookups.with(|l| {
                l.actors
                    .iter()
                    .map(|a| (a.id, a.full_name()))
                    .collect::<Vec<_>>()
            })
        });
        view! { <CastPanel cast=cast actors=actors /> }.into_any()
    }

    fn row_actions(entity: &AudiovisualContent) -> AnyView {
        let cast = use_cast();
        let id = entity.id;
        let title = entity.tittle.clone();
        view! {
            <button
                class="btn btn-ghost btn-sm"
                on:click=move |_| {
                    let title = title.clone();
                    spawn_local(async move { cast.open(id, title).await });
                }
            >
                "Reparto"
            </button>
        }
        .into_any()
    }
}
