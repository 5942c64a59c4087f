use super::*;
use crate::mock::{self, MemoryStore, MockTransport};
use crate::web::KeyValueStore;
use crate::notify::ToastKind;
use serde_json::json;
use std::cell::Cell;
use std::sync::Arc;

const FIND_ALL: &str = "/api/actor-audiovisual/findAll";

const ALL_ROWS: &str = r#"[
    {"actorId": 5, "audiovisualContentId": 9, "character": "Eva", "actorType": "Principal",
     "actor": {"id": 5, "nameActor": "Ana", "lastNameActor": "Ruiz"}},
    {"character": "Tom", "actorType": "Secondary",
     "actor": {"id": 6, "nameActor": "Leo"}, "audiovisualContent": {"id": 9}},
    {"actorId": 7, "audiovisualContentId": 10, "character": "Otro", "actorType": "Principal"}
]"#;

fn manager() -> (Arc<MockTransport>, Toaster, CastManager) {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    store.set(crate::auth::TOKEN_KEY, "abc");
    let toaster = Toaster::new();
    let cast = CastManager::new(mock::client(&transport, &store), toaster);
    (transport, toaster, cast)
}

fn characters(cast: &CastManager) -> Vec<String> {
    cast.members
        .get_untracked()
        .into_iter()
        .map(|m| m.character)
        .collect()
}

#[tokio::test]
async fn open_keeps_only_rows_of_that_content() {
    let (transport, _, cast) = manager();
    transport.respond(HttpMethod::Get, FIND_ALL, 200, ALL_ROWS);

    cast.open(9, "Neón Oscuro".to_string()).await;

    assert_eq!(characters(&cast), ["Eva", "Tom"]);
    assert!(!cast.loading.get_untracked());
    assert_eq!(
        cast.target.get_untracked().map(|t| t.title).as_deref(),
        Some("Neón Oscuro")
    );
}

#[tokio::test]
async fn add_posts_both_id_shapes_then_refetches() {
    let (transport, toaster, cast) = manager();
    transport.respond(HttpMethod::Get, FIND_ALL, 200, "[]");
    transport.respond(HttpMethod::Get, FIND_ALL, 200, ALL_ROWS);
    transport.respond(HttpMethod::Post, "/api/actor-audiovisual/create", 201, "{}");

    cast.open(9, "Neón Oscuro".to_string()).await;
    cast.draft.set(CastDraft {
        actor_id: "5".to_string(),
        character: " Eva ".to_string(),
        actor_type: "Principal".to_string(),
    });

    assert!(cast.add().await);

    let calls = transport.calls();
    let methods: Vec<HttpMethod> = calls.iter().map(|c| c.method).collect();
    assert_eq!(methods, [HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]);
    assert_eq!(
        calls[1].body,
        Some(json!({
            "actorId": 5,
            "audiovisualContentId": 9,
            "character": "Eva",
            "actorType": "Principal",
            "audiovisualContent": {"id": 9},
            "actor": {"id": 5}
        }))
    );
    assert_eq!(characters(&cast), ["Eva", "Tom"]);
    assert_eq!(cast.draft.get_untracked(), CastDraft::default());
    assert_eq!(
        toaster.snapshot().pop().map(|t| t.title).as_deref(),
        Some("Actor añadido al reparto")
    );
}

#[tokio::test]
async fn add_without_actor_sends_nothing() {
    let (transport, toaster, cast) = manager();
    transport.respond(HttpMethod::Get, FIND_ALL, 200, "[]");
    cast.open(9, "X".to_string()).await;
    cast.draft.update(|d| d.character = "Eva".to_string());

    assert!(!cast.add().await);

    assert_eq!(transport.mutations().len(), 0);
    assert_eq!(
        cast.field_errors.get_untracked().get("actor_id").map(String::as_str),
        Some("Debes seleccionar un actor")
    );
    assert_eq!(toaster.snapshot().pop().map(|t| t.kind), Some(ToastKind::Error));
}

#[tokio::test]
async fn remove_uses_the_composite_path_after_confirmation() {
    let (transport, _, cast) = manager();
    transport.respond(HttpMethod::Get, FIND_ALL, 200, ALL_ROWS);
    transport.respond(HttpMethod::Delete, "/api/actor-audiovisual/5/9", 204, "");

    cast.open(9, "X".to_string()).await;
    let asked = Cell::new(0);
    let confirm = |message: &str| {
        asked.set(asked.get() + 1);
        assert_eq!(message, "¿Eliminar actor del reparto?");
        true
    };

    assert!(cast.remove(5, &confirm).await);

    assert_eq!(asked.get(), 1);
    assert_eq!(transport.calls_to(HttpMethod::Delete, "/api/actor-audiovisual/5/9"), 1);
    assert_eq!(transport.calls_to(HttpMethod::Get, FIND_ALL), 2);
}

#[tokio::test]
async fn declined_removal_issues_no_request() {
    let (transport, _, cast) = manager();
    transport.respond(HttpMethod::Get, FIND_ALL, 200, ALL_ROWS);
    cast.open(9, "X".to_string()).await;

    assert!(!cast.remove(5, &|_: &str| false).await);

    assert!(transport.mutations().is_empty());
    assert_eq!(characters(&cast), ["Eva", "Tom"]);
}

#[test]
fn actor_type_labels() {
    assert_eq!(ActorType::label("Secondary"), "Secundario");
    assert_eq!(ActorType::label("Cameo"), "Cameo");
    assert_eq!(ActorType::parse("principal"), None);
}
