use super::*;
use crate::mock::{self, MemoryStore, MockTransport};
use crate::web::KeyValueStore;
use crate::notify::ToastKind;
use crate::validation::{required, required_id};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use streamvault_shared::protocol::{DeleteRoute, HttpMethod, UpdateRoute};

// =========================================================
// 测试用实体：书架，必须选择所在房间
// =========================================================

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Shelf {
    id: i64,
    label: String,
    room_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ShelfDraft {
    label: String,
    room_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShelfPayload {
    label: String,
    room_id: i64,
}

struct Shelves;

impl Resource for Shelves {
    type Entity = Shelf;
    type Draft = ShelfDraft;
    type Payload = ShelfPayload;
    type Lookups = ();

    const ENDPOINT: ResourceEndpoint =
        ResourceEndpoint::new("/api/shelves", UpdateRoute::ById, DeleteRoute::ById);
    const MESSAGES: Messages = Messages {
        created: "Estante creado",
        updated: "Estante actualizado",
        deleted: "Estante eliminado",
        confirm_delete: "¿Eliminar este estante?",
    };

    fn id(entity: &Shelf) -> i64 {
        entity.id
    }

    fn draft_from(entity: &Shelf) -> ShelfDraft {
        ShelfDraft {
            label: entity.label.clone(),
            room_id: entity.room_id.to_string(),
        }
    }

    fn to_payload(draft: &ShelfDraft, _mode: FormMode) -> Result<ShelfPayload, ValidationError> {
        Ok(ShelfPayload {
            label: required("label", &draft.label, "Nombre requerido")?,
            room_id: required_id("room_id", &draft.room_id, "Selecciona una sala")?,
        })
    }
}

const FIND_ALL: &str = "/api/shelves/findAll";

struct Fixture {
    transport: Arc<MockTransport>,
    toaster: Toaster,
    screen: CrudScreen<Shelves>,
}

fn fixture() -> Fixture {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    store.set(crate::auth::TOKEN_KEY, "abc");
    let toaster = Toaster::new();
    let screen = CrudScreen::new(mock::client(&transport, &store), toaster);
    Fixture {
        transport,
        toaster,
        screen,
    }
}

fn labels(screen: &CrudScreen<Shelves>) -> Vec<(i64, String)> {
    screen
        .list
        .get_untracked()
        .into_iter()
        .map(|s| (s.id, s.label))
        .collect()
}

fn last_toast(toaster: &Toaster) -> (ToastKind, String, Option<String>) {
    let toast = toaster.snapshot().pop().expect("a toast was raised");
    (toast.kind, toast.title, toast.description)
}

// =========================================================
// 列表
// =========================================================

#[tokio::test]
async fn refresh_sorts_by_id_and_clears_loading() {
    let f = fixture();
    f.transport.respond(
        HttpMethod::Get,
        FIND_ALL,
        200,
        r#"[{"id":3,"label":"C"},{"id":1,"label":"A"},{"id":2,"label":"B"}]"#,
    );

    assert!(f.screen.list_loading.get_untracked());
    f.screen.refresh().await;

    assert!(!f.screen.list_loading.get_untracked());
    let ids: Vec<i64> = labels(&f.screen).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(
        f.transport.calls()[0].authorization.as_deref(),
        Some("Bearer abc")
    );
}

#[tokio::test]
async fn failed_first_load_still_clears_loading() {
    let f = fixture();
    f.transport
        .respond(HttpMethod::Get, FIND_ALL, 500, r#"{"error":"boom"}"#);

    f.screen.refresh().await;

    assert!(!f.screen.list_loading.get_untracked());
    assert!(f.screen.list.get_untracked().is_empty());
    let (kind, _, description) = last_toast(&f.toaster);
    assert_eq!(kind, ToastKind::Error);
    assert_eq!(description.as_deref(), Some("boom"));
}

// =========================================================
// 提交
// =========================================================

#[tokio::test]
async fn successful_create_shows_the_server_collection() {
    let f = fixture();
    f.transport
        .respond(HttpMethod::Get, FIND_ALL, 200, r#"[{"id":1,"label":"A"}]"#);
    f.transport.respond(
        HttpMethod::Get,
        FIND_ALL,
        200,
        r#"[{"id":1,"label":"A (renamed)"},{"id":40,"label":"Server copy"}]"#,
    );
    f.transport
        .respond(HttpMethod::Post, "/api/shelves/create", 201, r#"{"id":40}"#);

    f.screen.refresh().await;
    f.screen.open_create();
    f.screen.update_draft(|d| {
        d.label = "Local".to_string();
        d.room_id = "5".to_string();
    });

    assert!(f.screen.submit().await);

    assert_eq!(
        labels(&f.screen),
        [(1, "A (renamed)".to_string()), (40, "Server copy".to_string())]
    );
    assert!(!f.screen.dialog_open.get_untracked());
    assert_eq!(f.screen.draft.get_untracked(), ShelfDraft::default());
    assert_eq!(f.screen.mode.get_untracked(), FormMode::Create);

    let calls = f.transport.calls();
    let methods: Vec<HttpMethod> = calls.iter().map(|c| c.method).collect();
    assert_eq!(methods, [HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]);
    assert_eq!(calls[1].body, Some(json!({"label": "Local", "roomId": 5})));
    assert_eq!(last_toast(&f.toaster).1, "Estante creado");
}

#[tokio::test]
async fn placeholder_select_blocks_the_create_call() {
    let f = fixture();
    f.screen.open_create();
    f.screen.update_draft(|d| {
        d.label = "Local".to_string();
        d.room_id = "0".to_string();
    });

    assert!(!f.screen.submit().await);

    assert_eq!(f.transport.calls_to(HttpMethod::Post, "/api/shelves/create"), 0);
    assert!(f.transport.calls().is_empty());
    assert!(f.screen.dialog_open.get_untracked());
    assert_eq!(
        f.screen.field_errors.get_untracked().get("room_id").map(String::as_str),
        Some("Selecciona una sala")
    );
    let (kind, _, description) = last_toast(&f.toaster);
    assert_eq!(kind, ToastKind::Error);
    assert_eq!(description.as_deref(), Some("Selecciona una sala"));
}

#[tokio::test]
async fn edit_puts_to_the_record_and_stringifies_ids() {
    let f = fixture();
    f.transport.respond(HttpMethod::Put, "/api/shelves/2", 200, "{}");
    f.transport.respond(HttpMethod::Get, FIND_ALL, 200, "[]");

    let shelf = Shelf {
        id: 2,
        label: "B".to_string(),
        room_id: 7,
    };
    f.screen.open_edit(&shelf);
    assert_eq!(f.screen.mode.get_untracked(), FormMode::Edit(2));
    assert_eq!(f.screen.draft.get_untracked().room_id, "7");

    assert!(f.screen.submit().await);

    let mutations = f.transport.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].path, "/api/shelves/2");
    assert_eq!(mutations[0].body, Some(json!({"label": "B", "roomId": 7})));
    assert_eq!(last_toast(&f.toaster).1, "Estante actualizado");
}

#[tokio::test]
async fn failed_save_keeps_the_dialog_and_draft() {
    let f = fixture();
    f.transport.respond(
        HttpMethod::Post,
        "/api/shelves/create",
        409,
        r#"{"mensaje":"Ya existe"}"#,
    );

    f.screen.open_create();
    f.screen.update_draft(|d| {
        d.label = "Dup".to_string();
        d.room_id = "1".to_string();
    });

    assert!(!f.screen.submit().await);

    assert!(f.screen.dialog_open.get_untracked());
    assert_eq!(f.screen.draft.get_untracked().label, "Dup");
    assert_eq!(f.transport.calls_to(HttpMethod::Get, FIND_ALL), 0);
    assert_eq!(last_toast(&f.toaster).2.as_deref(), Some("Ya existe"));
    assert!(!f.screen.submitting.get_untracked());
}

// =========================================================
// 删除
// =========================================================

#[tokio::test]
async fn declined_confirmation_issues_no_request() {
    let f = fixture();
    let declined = |_: &str| false;

    assert!(!f.screen.remove(7, &declined).await);
    assert!(f.transport.calls().is_empty());
    assert!(f.toaster.snapshot().is_empty());
}

#[tokio::test]
async fn confirmed_delete_then_refetches() {
    let f = fixture();
    f.transport.respond(HttpMethod::Delete, "/api/shelves/7", 204, "");
    f.transport
        .respond(HttpMethod::Get, FIND_ALL, 200, r#"[{"id":1,"label":"A"}]"#);

    let asked = std::cell::RefCell::new(Vec::new());
    let accept = |message: &str| {
        asked.borrow_mut().push(message.to_string());
        true
    };

    assert!(f.screen.remove(7, &accept).await);

    assert_eq!(asked.into_inner(), ["¿Eliminar este estante?"]);
    let calls = f.transport.calls();
    assert_eq!(calls[0].method, HttpMethod::Delete);
    assert_eq!(calls[0].path, "/api/shelves/7");
    assert_eq!(calls[1].method, HttpMethod::Get);
    assert_eq!(labels(&f.screen), [(1, "A".to_string())]);
}

#[tokio::test]
async fn failed_delete_leaves_the_list_alone() {
    let f = fixture();
    f.transport.respond(
        HttpMethod::Get,
        FIND_ALL,
        200,
        r#"[{"id":1,"label":"A"},{"id":7,"label":"G"}]"#,
    );
    f.transport
        .respond(HttpMethod::Delete, "/api/shelves/7", 500, r#"{"message":"En uso"}"#);
    f.screen.refresh().await;

    assert!(!f.screen.remove(7, &|_: &str| true).await);

    assert_eq!(labels(&f.screen).len(), 2);
    assert_eq!(f.transport.calls_to(HttpMethod::Get, FIND_ALL), 1);
    let (kind, _, description) = last_toast(&f.toaster);
    assert_eq!(kind, ToastKind::Error);
    assert_eq!(description.as_deref(), Some("En uso"));
}

// =========================================================
// 多选
// =========================================================

#[test]
fn toggling_twice_restores_the_selection() {
    let original: BTreeSet<i64> = [3, 1].into_iter().collect();
    for value in [1, 2] {
        let mut set = original.clone();
        toggle(&mut set, value);
        assert_ne!(set, original);
        toggle(&mut set, value);
        assert_eq!(set, original);
    }
}
