//! 测试用的替身组件
//!
//! - `MockTransport`: 按 (方法, 路径) 排队的脚本化响应，并记录每一次调用
//! - `MemoryStore`: 内存中的键值存储

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use streamvault_shared::ApiError;
use streamvault_shared::protocol::HttpMethod;

use crate::api::ApiClient;
use crate::request::{HttpRequest, HttpResponse, Transport};
use crate::web::KeyValueStore;

pub const BASE_URL: &str = "http://api.test";

/// 一次被记录的调用
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Default)]
pub struct MockTransport {
    /// 每个路由的响应队列；只剩一个时重复返回它
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Result<HttpResponse, ApiError>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 为路由追加一个响应
    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    /// 为路由追加一次网络失败
    pub fn fail(&self, method: HttpMethod, path: &str) {
        self.push(method, path, Err(ApiError::network("connection refused")));
    }

    fn push(&self, method: HttpMethod, path: &str, response: Result<HttpResponse, ApiError>) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// 只保留非 GET 调用，便于断言写操作
    pub fn mutations(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != HttpMethod::Get)
            .collect()
    }

    pub fn calls_to(&self, method: HttpMethod, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = req
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&req.url)
            .to_string();
        self.calls.lock().unwrap().push(RecordedCall {
            method: req.method,
            path: path.clone(),
            authorization: req.header("Authorization").map(str::to_string),
            body: req
                .body
                .as_deref()
                .map(|b| serde_json::from_str(b).expect("request bodies are JSON")),
        });

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&(req.method, path)) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue.front().cloned().unwrap(),
            _ => Ok(HttpResponse::new(404, "")),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.lock().unwrap().remove(key);
        true
    }
}

/// 以 mock 组件构造的客户端
pub fn client(transport: &Arc<MockTransport>, store: &Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(BASE_URL, transport.clone(), store.clone())
}
