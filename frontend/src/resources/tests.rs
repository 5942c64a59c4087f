use super::*;
use leptos::prelude::*;
use crate::crud::{CrudScreen, FormMode, Resource};
use crate::mock::{self, MemoryStore, MockTransport};
use crate::notify::Toaster;
use crate::web::KeyValueStore;
use serde_json::json;
use streamvault_shared::protocol::HttpMethod;

use super::actors::{ActorDraft, Actors};
use super::cities::{Cities, CityDraft};
use super::content::{ContentDraft, Contents};
use super::customers::{CustomerDraft, Customers};
use super::genres::{GenreDraft, Genres};
use super::memberships::{MembershipDraft, Memberships};
use super::users::{UserDraft, Users, role_label};

fn payload_json<R: Resource>(draft: &R::Draft, mode: FormMode) -> serde_json::Value {
    let payload = R::to_payload(draft, mode).expect("draft is valid");
    serde_json::to_value(payload).unwrap()
}

fn rejection<R: Resource>(draft: &R::Draft, mode: FormMode) -> (Option<&'static str>, String) {
    let err = R::to_payload(draft, mode).err().expect("draft is rejected");
    (err.field, err.message)
}

fn genres() -> Vec<FilmGenre> {
    vec![
        FilmGenre {
            id: 1,
            movie_genre: "Acción".to_string(),
        },
        FilmGenre {
            id: 2,
            movie_genre: "Drama".to_string(),
        },
    ]
}

// =========================================================
// 公共辅助
// =========================================================

#[test]
fn forbidden_with_an_image_blames_the_upload() {
    let forbidden = ApiError::new(403, "Forbidden");
    assert!(image_failure_message(true, &forbidden).contains("rechazó la imagen"));
    assert!(image_failure_message(false, &forbidden).contains("No tienes permisos"));

    let conflict = ApiError::new(409, "Duplicado");
    assert_eq!(image_failure_message(true, &conflict), "Duplicado");
}

#[test]
fn unset_ids_render_as_the_placeholder() {
    assert_eq!(id_value(Some(4)), "4");
    assert_eq!(id_value(Some(0)), "");
    assert_eq!(id_value(None), "");
    assert_eq!(genre_names(&genres()), "Acción, Drama");
}

// =========================================================
// 各实体的校验与请求体
// =========================================================

#[test]
fn genre_names_must_be_unique_ignoring_case_and_spaces() {
    let existing = genres();
    let draft = GenreDraft {
        movie_genre: "  drama ".to_string(),
    };

    let err = Genres::validate(&draft, FormMode::Create, &existing).unwrap_err();
    assert_eq!(err.message, "El género ya existe");

    // 编辑同一条记录时不算重复
    assert!(Genres::validate(&draft, FormMode::Edit(2), &existing).is_ok());
    assert!(Genres::validate(&draft, FormMode::Edit(1), &existing).is_err());
}

#[test]
fn city_requires_a_department() {
    let draft = CityDraft {
        name: "Medellín".to_string(),
        department_id: String::new(),
    };
    assert_eq!(
        rejection::<Cities>(&draft, FormMode::Create),
        (Some("department_id"), "Debes seleccionar un departamento".to_string())
    );

    let draft = CityDraft {
        department_id: "3".to_string(),
        ..draft
    };
    assert_eq!(
        payload_json::<Cities>(&draft, FormMode::Create),
        json!({"name": "Medellín", "departamentId": 3})
    );
}

#[test]
fn actor_picture_travels_as_base64_with_content_type() {
    let draft = ActorDraft {
        name: "Ana".to_string(),
        last_name: "Ruiz".to_string(),
        picture: Some("iVBORw0=".to_string()),
        picture_content_type: Some("image/png".to_string()),
    };
    assert_eq!(
        payload_json::<Actors>(&draft, FormMode::Create),
        json!({
            "nameActor": "Ana",
            "lastNameActor": "Ruiz",
            "picture": "iVBORw0=",
            "pictureContentType": "image/png"
        })
    );
    assert!(Actors::failure_message(&draft, &ApiError::new(403, "")).contains("imagen"));
}

#[test]
fn membership_numbers_are_parsed_before_submit() {
    let mut draft = MembershipDraft {
        name: "Premium".to_string(),
        price: "19,99".to_string(),
        duration: "30".to_string(),
        description: "HD".to_string(),
        ..Default::default()
    };
    let body = payload_json::<Memberships>(&draft, FormMode::Create);
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["duration"], json!(30));
    assert_eq!(body["membershipName"], json!("Premium"));

    draft.duration = "un mes".to_string();
    let (field, message) = rejection::<Memberships>(&draft, FormMode::Create);
    assert_eq!(field, Some("duration"));
    assert!(message.contains("valores numéricos"));
}

#[test]
fn content_requires_director_and_a_genre() {
    let mut draft = ContentDraft {
        title: "Neón Oscuro".to_string(),
        release_date: "2024-05-01".to_string(),
        duration: "116".to_string(),
        age_rating: "16".to_string(),
        trailer_url: "https://t".to_string(),
        country: "Colombia".to_string(),
        ..Default::default()
    };
    assert_eq!(
        rejection::<Contents>(&draft, FormMode::Create).1,
        "Debes seleccionar un director"
    );

    draft.director_id = "2".to_string();
    assert_eq!(
        rejection::<Contents>(&draft, FormMode::Create),
        (Some("genres"), "Debes seleccionar al menos un género".to_string())
    );

    draft.genre_ids = [3, 1].into_iter().collect();
    assert_eq!(
        payload_json::<Contents>(&draft, FormMode::Edit(9)),
        json!({
            "tittle": "Neón Oscuro",
            "relaseDate": "2024-05-01",
            "description": "",
            "duration": 116,
            "ageRating": 16.0,
            "trailerURL": "https://t",
            "countryProduction": "Colombia",
            "directorId": 2,
            "filmGenres": [{"id": 1}, {"id": 3}]
        })
    );
}

#[test]
fn new_users_need_a_password_but_edits_may_omit_it() {
    let mut draft = UserDraft {
        login: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        ..Default::default()
    };
    draft.authorities.insert("ROLE_USER".to_string());

    assert_eq!(
        rejection::<Users>(&draft, FormMode::Create).1,
        "La contraseña es obligatoria para nuevos usuarios"
    );

    let body = payload_json::<Users>(&draft, FormMode::Edit(4));
    assert!(body.get("password").is_none());
    assert_eq!(body["langKey"], json!("es"));
    assert_eq!(body["activated"], json!(true));
    assert_eq!(body["authorities"], json!(["ROLE_USER"]));

    draft.password = "secret1".to_string();
    let body = payload_json::<Users>(&draft, FormMode::Create);
    assert_eq!(body["password"], json!("secret1"));
    assert_eq!(role_label("ROLE_ADMIN"), "ADMIN");
}

#[test]
fn customer_references_are_all_required() {
    let mut draft = CustomerDraft {
        document_number: "123".to_string(),
        first_name: "Ana".to_string(),
        first_last_name: "Ruiz".to_string(),
        user_id: "1".to_string(),
        document_type_id: "2".to_string(),
        sex_id: "3".to_string(),
        city_id: "0".to_string(),
        ..Default::default()
    };
    assert_eq!(
        rejection::<Customers>(&draft, FormMode::Create),
        (None, "Por favor complete todos los campos obligatorios".to_string())
    );

    draft.city_id = "4".to_string();
    draft.genre_ids.insert(2);
    assert_eq!(
        payload_json::<Customers>(&draft, FormMode::Create),
        json!({
            "documentNumber": "123",
            "firstName": "Ana",
            "secondName": null,
            "firstLasName": "Ruiz",
            "secondLastName": null,
            "user": {"id": 1},
            "documentType": {"id": 2},
            "sex": {"id": 3},
            "cities": {"id": 4},
            "filmGenres": [{"id": 2}]
        })
    );
}

// =========================================================
// 通过通用页面走一遍
// =========================================================

#[tokio::test]
async fn genre_edit_puts_the_id_in_the_body() {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    store.set(crate::auth::TOKEN_KEY, "abc");
    transport.respond(
        HttpMethod::Get,
        "/api/film-genres/findAll",
        200,
        r#"[{"id":1,"movieGenre":"Acción"},{"id":2,"movieGenre":"Drama"}]"#,
    );
    transport.respond(HttpMethod::Put, "/api/film-genres/update", 200, "{}");
    let screen = CrudScreen::<Genres>::new(mock::client(&transport, &store), Toaster::new());

    screen.refresh().await;
    let drama = screen.list.get_untracked()[1].clone();
    screen.open_edit(&drama);
    screen.update_draft(|d| d.movie_genre = "Drama clásico".to_string());

    assert!(screen.submit().await);

    let put = &transport.mutations()[0];
    assert_eq!(put.body, Some(json!({"id": 2, "movieGenre": "Drama clásico"})));
}

#[tokio::test]
async fn duplicate_genre_is_rejected_without_a_request() {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    transport.respond(
        HttpMethod::Get,
        "/api/film-genres/findAll",
        200,
        r#"[{"id":1,"movieGenre":"Acción"}]"#,
    );
    let screen = CrudScreen::<Genres>::new(mock::client(&transport, &store), Toaster::new());

    screen.refresh().await;
    screen.open_create();
    screen.update_draft(|d| d.movie_genre = "ACCIÓN".to_string());

    assert!(!screen.submit().await);
    assert!(transport.mutations().is_empty());
    assert!(screen.dialog_open.get_untracked());
    assert_eq!(screen.field_error("movie_genre").as_deref(), Some("El género ya existe"));
}

#[tokio::test]
async fn content_lookups_load_directors_genres_and_actors() {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    transport.respond(
        HttpMethod::Get,
        "/api/directors/findAll",
        200,
        r#"[{"id":2,"nameDirector":"Lucía","lasNameDirector":"Mora"}]"#,
    );
    transport.respond(HttpMethod::Get, "/api/film-genres/findAll", 200, r#"[{"id":1,"movieGenre":"Acción"}]"#);
    transport.respond(HttpMethod::Get, "/api/actors/findAll", 200, "[]");
    let screen = CrudScreen::<Contents>::new(mock::client(&transport, &store), Toaster::new());

    screen.load_lookups().await;

    let lookups = screen.lookups.get_untracked();
    assert_eq!(lookups.directors[0].full_name(), "Lucía Mora");
    assert_eq!(lookups.genres.len(), 1);
    assert!(lookups.actors.is_empty());
}
