//! 资源客户端
//!
//! 所有远程调用都经过 [`ApiClient`]：统一拼接 URL、按调用选择是否携带令牌、
//! 把非 2xx 响应归一化为 [`ApiError`]。

use std::sync::Arc;

use leptos::prelude::use_context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use streamvault_shared::protocol::{ApiRequest, HttpMethod, ResourceEndpoint, UpdateRoute};
use streamvault_shared::{ApiError, HEADER_AUTHORIZATION};

use crate::auth::TOKEN_KEY;
use crate::request::{HttpRequest, HttpResponse, Transport};
use crate::web::KeyValueStore;

/// 调用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 自动附加持久化的 Bearer 令牌
    Authenticated,
    /// 不携带任何凭据（注册页面的参考数据等）
    Public,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            storage,
        }
    }

    /// 会话与令牌所在的持久化存储
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: HttpMethod, path: &str, access: Access) -> HttpRequest {
        let req = HttpRequest::new(&self.url(path), method);
        match access {
            Access::Public => req,
            Access::Authenticated => match self.storage.get(TOKEN_KEY) {
                Some(token) => req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}")),
                None => {
                    log::debug!("no credential stored for {} {}", method.as_str(), path);
                    req
                }
            },
        }
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = req.method;
        let url = req.url.clone();
        let response = self.transport.send(req).await?;
        if response.ok() {
            return Ok(response);
        }
        let err = ApiError::from_response(response.status, &response.body);
        log::warn!("{} {} -> {}: {}", method.as_str(), url, err.status, err.message);
        Err(err)
    }

    /// 解码响应体；空响应体按 JSON `null` 处理
    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
        let body = response.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(|e| ApiError::decode(response.status, e))
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body)
            .map_err(|e| ApiError::new(0, format!("No se pudo preparar la solicitud: {e}")))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, access: Access) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(HttpMethod::Get, path, access))
            .await?;
        Self::decode(&response)
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
        access: Access,
    ) -> Result<T, ApiError> {
        let req = self
            .request(method, path, access)
            .with_json_body(Self::encode(body)?);
        let response = self.execute(req).await?;
        Self::decode(&response)
    }

    pub async fn delete(&self, path: &str, access: Access) -> Result<(), ApiError> {
        self.execute(self.request(HttpMethod::Delete, path, access))
            .await
            .map(|_| ())
    }

    /// 调用固定端点（登录、注册）
    pub async fn call<R: ApiRequest>(&self, req: &R, access: Access) -> Result<R::Response, ApiError> {
        self.send_json(R::METHOD, R::PATH, req, access).await
    }

    // =========================================================
    // CRUD 资源约定
    // =========================================================

    /// 获取完整集合（无分页）
    pub async fn find_all<E: DeserializeOwned>(
        &self,
        endpoint: &ResourceEndpoint,
        access: Access,
    ) -> Result<Vec<E>, ApiError> {
        self.get(&endpoint.find_all_path(), access).await
    }

    pub async fn create<P: Serialize>(
        &self,
        endpoint: &ResourceEndpoint,
        payload: &P,
    ) -> Result<Value, ApiError> {
        self.send_json(
            HttpMethod::Post,
            &endpoint.create_path(),
            payload,
            Access::Authenticated,
        )
        .await
    }

    /// 整体更新；id 的位置由端点表决定
    pub async fn update<P: Serialize>(
        &self,
        endpoint: &ResourceEndpoint,
        id: i64,
        payload: &P,
    ) -> Result<Value, ApiError> {
        let path = endpoint.update_path(id);
        match endpoint.update {
            UpdateRoute::ById => {
                self.send_json(HttpMethod::Put, &path, payload, Access::Authenticated)
                    .await
            }
            UpdateRoute::IdInBody => {
                let mut body = serde_json::to_value(payload)
                    .map_err(|e| ApiError::new(0, format!("No se pudo preparar la solicitud: {e}")))?;
                if let Value::Object(fields) = &mut body {
                    fields.insert("id".to_string(), Value::from(id));
                }
                self.send_json(HttpMethod::Put, &path, &body, Access::Authenticated)
                    .await
            }
        }
    }

    pub async fn remove(&self, endpoint: &ResourceEndpoint, id: i64) -> Result<(), ApiError> {
        self.delete(&endpoint.delete_path(id), Access::Authenticated)
            .await
    }
}

/// 从 Context 获取资源客户端
pub fn use_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
