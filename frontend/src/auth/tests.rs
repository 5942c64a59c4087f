use super::*;
use crate::mock::{self, MemoryStore, MockTransport};
use crate::notify::ToastKind;
use std::sync::Arc;
use streamvault_shared::protocol::HttpMethod;

const LOGIN: &str = "/api/auth/login";

struct Fixture {
    transport: Arc<MockTransport>,
    store: Arc<MemoryStore>,
    toaster: Toaster,
    auth: AuthContext,
}

fn fixture() -> Fixture {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    let toaster = Toaster::new();
    let auth = AuthContext::new(mock::client(&transport, &store), toaster);
    Fixture {
        transport,
        store,
        toaster,
        auth,
    }
}

fn jdoe() -> Credentials {
    Credentials {
        identifier: "jdoe".to_string(),
        secret: "pw".to_string(),
    }
}

fn stored_session(store: &MemoryStore) -> Option<Session> {
    store
        .get(SESSION_KEY)
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

/// 令牌与会话记录要么同时存在，要么同时缺失
fn assert_paired(store: &MemoryStore) {
    assert_eq!(store.get(TOKEN_KEY).is_some(), store.get(SESSION_KEY).is_some());
}

#[tokio::test]
async fn login_persists_the_session_built_from_the_response() {
    let f = fixture();
    f.auth.initialize();
    f.transport.respond(
        HttpMethod::Post,
        LOGIN,
        200,
        r#"{"token":"abc","displayName":"Jane Doe","role":"ROLE_USER"}"#,
    );

    let session = f.auth.login(&jdoe()).await.unwrap();

    let expected = Session {
        email: "jdoe".to_string(),
        name: "Jane Doe".to_string(),
        role: "ROLE_USER".to_string(),
    };
    assert_eq!(session, expected);
    assert_eq!(stored_session(&f.store), Some(expected));
    assert_eq!(f.store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert!(f.auth.snapshot().is_authenticated());
    assert!(!f.auth.snapshot().is_admin());

    let sent = &f.transport.calls()[0];
    assert_eq!(sent.authorization, None);
    assert_eq!(
        sent.body,
        Some(serde_json::json!({"username": "jdoe", "password": "pw"}))
    );
}

#[tokio::test]
async fn rejected_login_leaves_state_untouched_and_notifies() {
    let f = fixture();
    f.auth.initialize();
    f.transport
        .respond(HttpMethod::Post, LOGIN, 401, r#"{"message":"Bad credentials"}"#);

    let err = f.auth.login(&jdoe()).await.unwrap_err();

    assert_eq!(err.status, 401);
    assert!(!f.auth.snapshot().is_authenticated());
    assert_eq!(f.store.len(), 0);
    let toasts = f.toaster.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert!(toasts[0].description.as_deref().unwrap().contains("Bad credentials"));
}

#[tokio::test]
async fn response_without_token_is_a_failure() {
    let f = fixture();
    f.transport
        .respond(HttpMethod::Post, LOGIN, 200, r#"{"displayName":"Jane Doe"}"#);

    assert!(f.auth.login(&jdoe()).await.is_err());
    assert_eq!(f.store.len(), 0);
}

#[tokio::test]
async fn spanish_login_fields_grant_admin() {
    let f = fixture();
    f.transport.respond(
        HttpMethod::Post,
        LOGIN,
        200,
        r#"{"token":"t","nombreCompleto":"Admin","rol":"ROLE_ADMIN"}"#,
    );

    f.auth.login(&jdoe()).await.unwrap();
    assert!(f.auth.snapshot().is_admin());
}

#[tokio::test]
async fn storage_stays_paired_across_login_and_logout() {
    let f = fixture();
    f.auth.initialize();
    f.transport.respond(
        HttpMethod::Post,
        LOGIN,
        200,
        r#"{"token":"abc","displayName":"Jane Doe","role":"ROLE_USER"}"#,
    );

    assert_paired(&f.store);
    for _ in 0..2 {
        f.auth.login(&jdoe()).await.unwrap();
        assert_paired(&f.store);
        assert_eq!(f.store.len(), 2);
        f.auth.sign_out();
        assert_paired(&f.store);
        assert_eq!(f.store.len(), 0);
    }
    assert!(!f.auth.snapshot().is_authenticated());
}

#[test]
fn initialize_restores_a_valid_pair_once() {
    let f = fixture();
    f.store.set(TOKEN_KEY, "abc");
    f.store
        .set(SESSION_KEY, r#"{"email":"jdoe","name":"Jane Doe","role":"ADMIN"}"#);

    assert_eq!(f.auth.snapshot().phase, Phase::Loading);
    f.auth.initialize();

    let state = f.auth.snapshot();
    assert_eq!(state.phase, Phase::Ready);
    assert!(state.is_admin());

    // 第二次调用不会重新读取存储
    f.store.delete(TOKEN_KEY);
    f.store.delete(SESSION_KEY);
    f.auth.initialize();
    assert!(f.auth.snapshot().is_authenticated());
}

#[test]
fn corrupted_or_half_persisted_sessions_are_discarded() {
    let corrupted = MemoryStore::new();
    corrupted.set(TOKEN_KEY, "abc");
    corrupted.set(SESSION_KEY, r#"{"email":42}"#);
    assert_eq!(restore_session(corrupted.as_ref()), None);
    assert_eq!(corrupted.len(), 0);

    let token_only = MemoryStore::new();
    token_only.set(TOKEN_KEY, "abc");
    assert_eq!(restore_session(token_only.as_ref()), None);
    assert_eq!(token_only.len(), 0);

    let record_only = MemoryStore::new();
    record_only.set(SESSION_KEY, r#"{"email":"a","name":"b","role":"c"}"#);
    assert_eq!(restore_session(record_only.as_ref()), None);
    assert_eq!(record_only.len(), 0);
}

#[tokio::test]
async fn register_never_signs_in() {
    let f = fixture();
    f.auth.initialize();
    f.transport
        .respond(HttpMethod::Post, "/api/users/register", 201, r#"{"id":9}"#);

    let request = RegisterRequest {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        password: "secret1".to_string(),
        ..Default::default()
    };
    f.auth.register(&request).await.unwrap();

    assert!(!f.auth.snapshot().is_authenticated());
    assert_eq!(f.store.len(), 0);
    assert_eq!(f.transport.calls()[0].authorization, None);
    assert_eq!(f.toaster.snapshot()[0].kind, ToastKind::Success);
}

#[tokio::test]
async fn failed_registration_returns_the_normalized_error() {
    let f = fixture();
    f.transport.respond(
        HttpMethod::Post,
        "/api/users/register",
        400,
        r#"{"mensaje":"El usuario ya existe"}"#,
    );

    let err = f.auth.register(&RegisterRequest::default()).await.unwrap_err();
    assert_eq!(err.message, "El usuario ya existe");
    assert_eq!(f.toaster.snapshot()[0].kind, ToastKind::Error);
}

/// 拒绝写入会话记录的存储（如配额已满）
#[derive(Default)]
struct RecordRejectingStore {
    inner: MemoryStore,
}

impl KeyValueStore for RecordRejectingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        key != SESSION_KEY && self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.delete(key)
    }
}

#[tokio::test]
async fn login_fails_when_the_session_cannot_be_persisted() {
    let transport = MockTransport::new();
    let store = Arc::new(RecordRejectingStore::default());
    let toaster = Toaster::new();
    let client = ApiClient::new(mock::BASE_URL, transport.clone(), store.clone());
    let auth = AuthContext::new(client, toaster);
    auth.initialize();
    transport.respond(
        HttpMethod::Post,
        LOGIN,
        200,
        r#"{"token":"abc","displayName":"Jane Doe","role":"ROLE_USER"}"#,
    );

    let err = auth.login(&jdoe()).await.unwrap_err();

    assert_eq!(err.status, 0);
    assert!(!auth.snapshot().is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(SESSION_KEY), None);
    let toasts = toaster.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
}
