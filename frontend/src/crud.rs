//! 通用实体 CRUD 页面的状态与流程
//!
//! 每个后台实体只需实现 [`Resource`]：端点、草稿与请求体之间的转换、本地校验。
//! 列表加载、弹窗开关、提交、删除的流程由 [`CrudScreen`] 统一完成：
//!
//! - 列表总是整体替换为服务端返回的集合，并按 id 升序排列
//! - 任何写操作成功后，都在收到响应之后再重新拉取列表
//! - 提交失败时弹窗保持打开，草稿不丢失
//! - 删除必须先经过确认，未确认不发起请求
//!
//! 所有信号写入都使用 `try_*`，页面卸载后到达的响应会被丢弃。

use std::collections::BTreeSet;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use streamvault_shared::ApiError;
use streamvault_shared::protocol::ResourceEndpoint;

use crate::api::{Access, ApiClient};
use crate::notify::Toaster;
use crate::validation::{FieldErrors, ValidationError};
use crate::web::Confirm;

/// 弹窗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// 各实体的提示文案
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
}

/// 一种后台实体的配置
#[allow(async_fn_in_trait)]
pub trait Resource: 'static {
    /// 列表中的实体（服务端返回的形状）
    type Entity: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;
    /// 表单草稿；下拉框的 id 以字符串保存
    type Draft: Clone + Default + PartialEq + Send + Sync + 'static;
    /// 发送给服务端的完整请求体
    type Payload: Serialize;
    /// 下拉框所需的参考数据
    type Lookups: Clone + Default + Send + Sync + 'static;

    const ENDPOINT: ResourceEndpoint;
    const MESSAGES: Messages;

    fn id(entity: &Self::Entity) -> i64;

    /// 编辑时由实体生成草稿
    fn draft_from(entity: &Self::Entity) -> Self::Draft;

    /// 需要结合现有列表的校验（如重名检查）
    fn validate(
        _draft: &Self::Draft,
        _mode: FormMode,
        _existing: &[Self::Entity],
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    /// 草稿 → 请求体，包含逐字段校验
    fn to_payload(draft: &Self::Draft, mode: FormMode) -> Result<Self::Payload, ValidationError>;

    /// 保存失败时展示给用户的说明
    fn failure_message(_draft: &Self::Draft, err: &ApiError) -> String {
        err.message.clone()
    }

    async fn load_lookups(_client: &ApiClient) -> Result<Self::Lookups, ApiError> {
        Ok(Self::Lookups::default())
    }
}

/// 单个 CRUD 页面的全部状态
pub struct CrudScreen<R: Resource> {
    pub list: RwSignal<Vec<R::Entity>>,
    /// 首次加载完成前为 `true`
    pub list_loading: RwSignal<bool>,
    pub dialog_open: RwSignal<bool>,
    pub mode: RwSignal<FormMode>,
    pub draft: RwSignal<R::Draft>,
    pub field_errors: RwSignal<FieldErrors>,
    pub lookups: RwSignal<R::Lookups>,
    pub submitting: RwSignal<bool>,
    client: StoredValue<ApiClient>,
    toaster: Toaster,
}

impl<R: Resource> Clone for CrudScreen<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CrudScreen<R> {}

impl<R: Resource> CrudScreen<R> {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            list_loading: RwSignal::new(true),
            dialog_open: RwSignal::new(false),
            mode: RwSignal::new(FormMode::Create),
            draft: RwSignal::new(R::Draft::default()),
            field_errors: RwSignal::new(FieldErrors::new()),
            lookups: RwSignal::new(R::Lookups::default()),
            submitting: RwSignal::new(false),
            client: StoredValue::new(client),
            toaster,
        }
    }

    /// 页面已卸载时返回 `None`
    fn client(&self) -> Option<ApiClient> {
        self.client.try_get_value()
    }

    pub fn toaster(&self) -> Toaster {
        self.toaster
    }

    /// 重新拉取完整列表
    pub async fn refresh(&self) {
        let Some(client) = self.client() else {
            return;
        };
        match client
            .find_all::<R::Entity>(&R::ENDPOINT, Access::Authenticated)
            .await
        {
            Ok(mut items) => {
                items.sort_by_key(R::id);
                self.list.try_set(items);
            }
            Err(err) => {
                log::error!("loading {} failed: {}", R::ENDPOINT.base, err);
                self.toaster
                    .error("Error al cargar los datos", Some(err.message));
            }
        }
        self.list_loading.try_set(false);
    }

    /// 加载下拉框参考数据
    pub async fn load_lookups(&self) {
        let Some(client) = self.client() else {
            return;
        };
        match R::load_lookups(&client).await {
            Ok(lookups) => {
                self.lookups.try_set(lookups);
            }
            Err(err) => {
                log::error!("loading lookups for {} failed: {}", R::ENDPOINT.base, err);
                self.toaster
                    .error("Error al cargar datos relacionados", Some(err.message));
            }
        }
    }

    pub fn open_create(&self) {
        self.mode.set(FormMode::Create);
        self.draft.set(R::Draft::default());
        self.field_errors.set(FieldErrors::new());
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, entity: &R::Entity) {
        self.mode.set(FormMode::Edit(R::id(entity)));
        self.draft.set(R::draft_from(entity));
        self.field_errors.set(FieldErrors::new());
        self.dialog_open.set(true);
    }

    /// 关闭弹窗并重置草稿
    pub fn close(&self) {
        self.dialog_open.try_set(false);
        self.mode.try_set(FormMode::Create);
        self.draft.try_set(R::Draft::default());
        self.field_errors.try_set(FieldErrors::new());
    }

    pub fn update_draft(&self, edit: impl FnOnce(&mut R::Draft)) {
        self.draft.update(edit);
    }

    /// 某字段当前的错误信息（响应式）
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors.with(|errors| errors.get(field).cloned())
    }

    /// 提交弹窗中的草稿
    ///
    /// 本地校验失败时不发起请求。成功返回 `true`。
    pub async fn submit(&self) -> bool {
        let mode = self.mode.get_untracked();
        let draft = self.draft.get_untracked();

        let checked = self
            .list
            .with_untracked(|existing| R::validate(&draft, mode, existing))
            .and_then(|()| R::to_payload(&draft, mode));
        let payload = match checked {
            Ok(payload) => payload,
            Err(err) => {
                self.toaster.error("Revisa el formulario", Some(err.message.clone()));
                self.field_errors.try_set(err.into_field_errors());
                return false;
            }
        };

        let Some(client) = self.client() else {
            return false;
        };
        self.field_errors.try_set(FieldErrors::new());
        self.submitting.try_set(true);
        let result = match mode {
            FormMode::Create => client.create(&R::ENDPOINT, &payload).await,
            FormMode::Edit(id) => client.update(&R::ENDPOINT, id, &payload).await,
        };
        self.submitting.try_set(false);

        match result {
            Ok(_) => {
                let message = if mode.is_edit() {
                    R::MESSAGES.updated
                } else {
                    R::MESSAGES.created
                };
                self.toaster.success(message, None);
                self.close();
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toaster
                    .error("Error al guardar", Some(R::failure_message(&draft, &err)));
                false
            }
        }
    }

    /// 删除一条记录；必须先通过确认
    pub async fn remove(&self, id: i64, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(R::MESSAGES.confirm_delete) {
            return false;
        }
        let Some(client) = self.client() else {
            return false;
        };
        match client.remove(&R::ENDPOINT, id).await {
            Ok(()) => {
                self.toaster.success(R::MESSAGES.deleted, None);
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toaster.error("Error al eliminar", Some(err.message));
                false
            }
        }
    }
}

/// 多选切换：存在则移除，不存在则加入
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests;
