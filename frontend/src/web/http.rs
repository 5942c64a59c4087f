//! HTTP 传输实现模块
//!
//! 基于 `gloo-net` 的 fetch 封装，实现 [`Transport`] 特性。

use gloo_net::http::{Request, RequestBuilder};
use streamvault_shared::ApiError;
use streamvault_shared::protocol::HttpMethod;

use crate::request::{HttpRequest, HttpResponse, Transport};

/// 浏览器 fetch 传输
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn builder(url: &str, method: HttpMethod) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = Self::builder(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let sent = match req.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(ApiError::network)?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::warn!("{} {} failed: {}", req.method.as_str(), req.url, e);
            ApiError::network(e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::decode(status, e))?;

        Ok(HttpResponse { status, body })
    }
}
