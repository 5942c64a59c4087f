//! 认证模块
//!
//! 会话状态由 [`AuthContext`] 独占写入，其余组件只读。
//! 路由守卫通过读取 `SessionState` 判断放行或重定向，与本模块解耦。
//!
//! 持久化约定：令牌存于 `token`，会话记录存于 `user`，两者总是成对写入、成对删除。

use leptos::prelude::*;
use streamvault_shared::{ApiError, Credentials, LoginRequest, RegisterRequest, Session};

use crate::api::{Access, ApiClient};
use crate::notify::Toaster;
use crate::web::KeyValueStore;

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const SESSION_KEY: &str = "user";

/// 会话生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// 尚未读取持久化存储
    #[default]
    Loading,
    Ready,
}

/// 会话读模型
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub phase: Phase,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

// =========================================================
// 持久化 (Persistence)
// =========================================================

/// 读取并校验持久化的会话
///
/// 令牌或会话记录缺失、记录无法解析为 `Session` 时视为未登录，
/// 并删除两个键以恢复成对约束。
pub fn restore_session(storage: &dyn KeyValueStore) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let record = storage.get(SESSION_KEY);

    match (token, record) {
        (None, None) => None,
        (Some(_), Some(record)) => match serde_json::from_str::<Session>(&record) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {}", e);
                clear_session(storage);
                None
            }
        },
        _ => {
            log::warn!("discarding half-persisted session");
            clear_session(storage);
            None
        }
    }
}

/// 成对写入令牌与会话记录
///
/// 任一写入失败时回滚，返回 `false`。
pub fn persist_session(storage: &dyn KeyValueStore, token: &str, session: &Session) -> bool {
    let record = match serde_json::to_string(session) {
        Ok(record) => record,
        Err(e) => {
            log::error!("cannot serialize session: {}", e);
            return false;
        }
    };

    if storage.set(TOKEN_KEY, token) && storage.set(SESSION_KEY, &record) {
        return true;
    }
    clear_session(storage);
    false
}

pub fn clear_session(storage: &dyn KeyValueStore) {
    storage.delete(TOKEN_KEY);
    storage.delete(SESSION_KEY);
}

// =========================================================
// 会话存储 (Session Store)
// =========================================================

/// 认证上下文
///
/// 在应用根部创建一次并通过 Context 注入。状态只能经由
/// `initialize` / `login` / `register` / `logout` 变更。
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<SessionState>,
    client: StoredValue<ApiClient>,
    toaster: Toaster,
}

impl AuthContext {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            client: StoredValue::new(client),
            toaster,
        }
    }

    /// 会话状态（只读信号）
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// 当前状态的非响应式快照
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    /// 从持久化存储恢复会话，`Loading -> Ready` 只发生一次
    pub fn initialize(&self) {
        if self.state.with_untracked(|s| s.phase) == Phase::Ready {
            return;
        }
        let session = self.client.with_value(|c| restore_session(c.storage()));
        match &session {
            Some(s) => log::info!("restored session for {}", s.email),
            None => log::debug!("no stored session"),
        }
        self.state.set(SessionState {
            session,
            phase: Phase::Ready,
        });
    }

    /// 登录
    ///
    /// 会话的 `email` 取用户输入的标识，显示名与角色取自服务端响应。
    /// 失败时（包括本地存储写入失败）状态与存储保持不变，并发出错误通知。
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let client = self.client.get_value();
        let request = LoginRequest::from(credentials);

        let response = match client.call(&request, Access::Public).await {
            Ok(response) if !response.token.is_empty() => response,
            Ok(_) => {
                let err = ApiError::decode(200, "la respuesta no contiene un token");
                self.toaster.error("Error al iniciar sesión", Some(err.message.clone()));
                return Err(err);
            }
            Err(err) => {
                self.toaster.error("Error al iniciar sesión", Some(err.message.clone()));
                return Err(err);
            }
        };

        let session = Session {
            email: credentials.identifier.clone(),
            name: response.display_name,
            role: response.role,
        };
        if !persist_session(client.storage(), &response.token, &session) {
            log::error!("cannot persist session for {}", session.email);
            let err = ApiError::new(0, "No se pudo guardar la sesión en este navegador");
            self.toaster.error("Error al iniciar sesión", Some(err.message.clone()));
            return Err(err);
        }

        log::info!("signed in as {} ({})", session.email, session.role);
        self.state.try_update(|s| {
            s.session = Some(session.clone());
            s.phase = Phase::Ready;
        });
        self.toaster
            .success("¡Bienvenido!", Some(format!("Hola, {}", session.name)));
        Ok(session)
    }

    /// 注册新账户；成功后不会自动登录
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let client = self.client.get_value();
        match client.call(request, Access::Public).await {
            Ok(_) => {
                log::info!("registered account {}", request.username);
                self.toaster.success(
                    "Registro exitoso",
                    Some("Ahora puedes iniciar sesión".to_string()),
                );
                Ok(())
            }
            Err(err) => {
                self.toaster.error("Error en el registro", Some(err.message.clone()));
                Err(err)
            }
        }
    }

    /// 清除存储与内存中的会话（不导航）
    pub fn sign_out(&self) {
        self.client.with_value(|c| clear_session(c.storage()));
        self.state.try_update(|s| {
            s.session = None;
            s.phase = Phase::Ready;
        });
        log::info!("signed out");
    }

    /// 注销并整页跳转到登录页
    pub fn logout(&self) {
        self.sign_out();
        crate::web::hard_navigate("/login");
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

#[cfg(test)]
mod tests;
