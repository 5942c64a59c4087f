use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::entities::FilmGenre;
use streamvault_shared::protocol::{FILM_GENRES, ResourceEndpoint};

use crate::components::crud_page::{AdminView, text_cell};
use crate::components::fields::TextField;
use crate::crud::{CrudScreen, FormMode, Messages, Resource};
use crate::validation::{ValidationError, required};

pub struct Genres;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreDraft {
    pub movie_genre: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenrePayload {
    pub movie_genre: String,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Resource for Genres {
    type Entity = FilmGenre;
    type Draft = GenreDraft;
    type Payload = GenrePayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint = FILM_GENRES;
    const MESSAGES: Messages = Messages {
        created: "Género creado",
        updated: "Género actualizado",
        deleted: "Género eliminado",
        confirm_delete: "¿Estás seguro de eliminar este género?",
    };

    fn id(entity: &FilmGenre) -> i64 {
        entity.id
    }

    fn draft_from(entity: &FilmGenre) -> GenreDraft {
        GenreDraft {
            movie_genre: entity.movie_genre.clone(),
        }
    }

    /// 名称去空白、忽略大小写后不得与其他记录重复
    fn validate(
        draft: &GenreDraft,
        mode: FormMode,
        existing: &[FilmGenre],
    ) -> Result<(), ValidationError> {
        let editing = match mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        };
        let wanted = normalize(&draft.movie_genre);
        let duplicate = existing
            .iter()
            .any(|g| Some(g.id) != editing && normalize(&g.movie_genre) == wanted);
        if duplicate {
            return Err(ValidationError::field("movie_genre", "El género ya existe"));
        }
        Ok(())
    }

    fn to_payload(draft: &GenreDraft, _mode: FormMode) -> Result<GenrePayload, ValidationError> {
        Ok(GenrePayload {
            movie_genre: required("movie_genre", &draft.movie_genre, "El nombre es obligatorio")?,
        })
    }
}

impl AdminView for Genres {
    const TITLE: &'static str = "Géneros";
    const SINGULAR: &'static str = "Género";
    const COLUMNS: &'static [&'static str] = &["Género"];

    fn cells(entity: &FilmGenre) -> Vec<AnyView> {
        vec![text_cell(entity.movie_genre.clone())]
    }

    fn form(screen: CrudScreen<Self>) -> AnyView {
        view! {
            <TextField
                label="Nombre del género"
                placeholder="Ej. Acción"
                required=true
                bind=screen.bind("movie_genre", |d| d.movie_genre.clone(), |d, v| d.movie_genre = v)
            />
        }
        .into_any()
    }
}
