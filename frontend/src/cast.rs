//! 演职员表管理
//!
//! 某部内容的演职员表来自 `actor-audiovisual` 全量列表按内容 id 过滤；
//! 每次添加或删除成功后都重新拉取，不在本地拼接。

use leptos::prelude::*;
use serde::Serialize;
use streamvault_shared::IdRef;
use streamvault_shared::entities::CastMember;
use streamvault_shared::protocol::{CAST, HttpMethod, cast_member_path};

use crate::api::{Access, ApiClient};
use crate::notify::Toaster;
use crate::validation::{FieldErrors, ValidationError, required, required_id};
use crate::web::Confirm;

/// 角色类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorType {
    #[default]
    Principal,
    Secondary,
}

impl ActorType {
    pub const CHOICES: &'static [(&'static str, &'static str)] =
        &[("Principal", "Principal"), ("Secondary", "Secundario")];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "Principal",
            Self::Secondary => "Secondary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Principal" => Some(Self::Principal),
            "Secondary" => Some(Self::Secondary),
            _ => None,
        }
    }

    /// 表格中显示的名称；未知值原样显示
    pub fn label(value: &str) -> &str {
        match Self::parse(value) {
            Some(Self::Principal) => "Principal",
            Some(Self::Secondary) => "Secundario",
            None => value,
        }
    }
}

/// 添加演员的表单
#[derive(Debug, Clone, PartialEq)]
pub struct CastDraft {
    pub actor_id: String,
    pub character: String,
    pub actor_type: String,
}

impl Default for CastDraft {
    fn default() -> Self {
        Self {
            actor_id: String::new(),
            character: String::new(),
            actor_type: ActorType::default().as_str().to_string(),
        }
    }
}

/// 新增条目的请求体；扁平 id 与嵌套引用同时发送
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastPayload {
    pub actor_id: i64,
    pub audiovisual_content_id: i64,
    pub character: String,
    pub actor_type: &'static str,
    pub audiovisual_content: IdRef,
    pub actor: IdRef,
}

impl CastDraft {
    pub fn to_payload(&self, content_id: i64) -> Result<CastPayload, ValidationError> {
        let actor_id = required_id("actor_id", &self.actor_id, "Debes seleccionar un actor")?;
        let character = required("character", &self.character, "El personaje es obligatorio")?;
        let actor_type = ActorType::parse(&self.actor_type)
            .ok_or_else(|| ValidationError::field("actor_type", "Tipo de actor inválido"))?;
        Ok(CastPayload {
            actor_id,
            audiovisual_content_id: content_id,
            character,
            actor_type: actor_type.as_str(),
            audiovisual_content: IdRef::from(content_id),
            actor: IdRef::from(actor_id),
        })
    }
}

/// 当前正在管理演职员表的内容
#[derive(Debug, Clone, PartialEq)]
pub struct CastTarget {
    pub content_id: i64,
    pub title: String,
}

/// 演职员表面板的状态
#[derive(Clone, Copy)]
pub struct CastManager {
    pub target: RwSignal<Option<CastTarget>>,
    pub members: RwSignal<Vec<CastMember>>,
    pub loading: RwSignal<bool>,
    pub draft: RwSignal<CastDraft>,
    pub field_errors: RwSignal<FieldErrors>,
    client: StoredValue<ApiClient>,
    toaster: Toaster,
}

impl CastManager {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            target: RwSignal::new(None),
            members: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            draft: RwSignal::new(CastDraft::default()),
            field_errors: RwSignal::new(FieldErrors::new()),
            client: StoredValue::new(client),
            toaster,
        }
    }

    fn content_id(&self) -> Option<i64> {
        self.target
            .try_with_untracked(|t| t.as_ref().map(|t| t.content_id))
            .flatten()
    }

    /// 打开某部内容的演职员表并加载
    pub async fn open(&self, content_id: i64, title: String) {
        self.target.try_set(Some(CastTarget { content_id, title }));
        self.members.try_set(Vec::new());
        self.draft.try_set(CastDraft::default());
        self.field_errors.try_set(FieldErrors::new());
        self.refresh().await;
    }

    pub fn close(&self) {
        self.target.try_set(None);
        self.members.try_set(Vec::new());
    }

    pub async fn refresh(&self) {
        let (Some(content_id), Some(client)) = (self.content_id(), self.client.try_get_value())
        else {
            return;
        };
        self.loading.try_set(true);
        match client
            .find_all::<CastMember>(&CAST, Access::Authenticated)
            .await
        {
            Ok(all) => {
                let members = all
                    .into_iter()
                    .filter(|m| m.content_id() == Some(content_id))
                    .collect();
                self.members.try_set(members);
            }
            Err(err) => {
                log::error!("loading cast of {content_id} failed: {err}");
                self.toaster
                    .error("Error al cargar el reparto", Some(err.message));
            }
        }
        self.loading.try_set(false);
    }

    /// 添加演员；本地校验失败时不发请求
    pub async fn add(&self) -> bool {
        let Some(content_id) = self.content_id() else {
            return false;
        };
        let draft = self.draft.get_untracked();
        let payload = match draft.to_payload(content_id) {
            Ok(payload) => payload,
            Err(err) => {
                self.toaster.error("Revisa el formulario", Some(err.message.clone()));
                self.field_errors.try_set(err.into_field_errors());
                return false;
            }
        };
        let Some(client) = self.client.try_get_value() else {
            return false;
        };
        self.field_errors.try_set(FieldErrors::new());
        let result: Result<serde_json::Value, _> = client
            .send_json(HttpMethod::Post, &CAST.create_path(), &payload, Access::Authenticated)
            .await;
        match result {
            Ok(_) => {
                self.toaster.success("Actor añadido al reparto", None);
                self.draft.try_set(CastDraft::default());
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toaster.error("Error al añadir actor", Some(err.message));
                false
            }
        }
    }

    /// 从演职员表中移除演员；必须先通过确认
    pub async fn remove(&self, actor_id: i64, confirm: &impl Confirm) -> bool {
        let Some(content_id) = self.content_id() else {
            return false;
        };
        if !confirm.confirm("¿Eliminar actor del reparto?") {
            return false;
        }
        let Some(client) = self.client.try_get_value() else {
            return false;
        };
        match client
            .delete(&cast_member_path(actor_id, content_id), Access::Authenticated)
            .await
        {
            Ok(()) => {
                self.toaster.success("Actor eliminado del reparto", None);
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toaster.error("Error al eliminar actor", Some(err.message));
                false
            }
        }
    }
}

/// 从 Context 获取演职员表面板
pub fn use_cast() -> CastManager {
    use_context::<CastManager>().expect("CastManager should be provided")
}

#[cfg(test)]
mod tests;
