use serde_json::Value;
use thiserror::Error;

/// 服务端未提供任何可读信息时使用的提示
pub const GENERIC_FAILURE: &str = "Ocurrió un error inesperado. Inténtalo de nuevo.";

/// 服务端在不同接口中使用的错误信息字段，按优先级排列
const MESSAGE_FIELDS: [&str; 3] = ["message", "mensaje", "error"];

/// 统一的远程调用失败描述
///
/// `status` 为 HTTP 状态码；网络不可达时为 `0`。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 从非 2xx 响应构造错误
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Self { status, message }
    }

    /// 请求未能到达服务端
    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self::new(0, format!("No se pudo conectar con el servidor: {detail}"))
    }

    /// 响应成功但无法解析
    pub fn decode(status: u16, detail: impl std::fmt::Display) -> Self {
        Self::new(status, format!("Respuesta inválida del servidor: {detail}"))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }
}

/// 按 `message` → `mensaje` → `error` → `errors[]` 的顺序提取错误信息
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    for field in MESSAGE_FIELDS {
        if let Some(text) = value.get(field).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }

    // Spring 风格的校验错误: {"errors": [{"field": "price", "defaultMessage": "..."}]}
    let details: Vec<String> = value
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|err| {
            let message = err.get("defaultMessage").and_then(Value::as_str)?;
            match err.get("field").and_then(Value::as_str) {
                Some(field) => Some(format!("{field}: {message}")),
                None => Some(message.to_string()),
            }
        })
        .collect();

    (!details.is_empty()).then(|| format!("Error de validación: {}", details.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_then_mensaje_then_error() {
        let all = r#"{"message":"a","mensaje":"b","error":"c"}"#;
        assert_eq!(ApiError::from_response(400, all).message, "a");

        let spanish = r#"{"mensaje":"Ya existe","error":"Conflict"}"#;
        assert_eq!(ApiError::from_response(409, spanish).message, "Ya existe");

        let only_error = r#"{"error":"Unauthorized"}"#;
        assert_eq!(ApiError::from_response(401, only_error).message, "Unauthorized");
    }

    #[test]
    fn falls_back_to_generic_text_for_empty_or_foreign_bodies() {
        for body in ["", "<html>oops</html>", "{}", r#"{"message":""}"#, "[1,2]"] {
            let err = ApiError::from_response(500, body);
            assert_eq!(err.message, GENERIC_FAILURE, "body: {body}");
            assert_eq!(err.status, 500);
        }
    }

    #[test]
    fn joins_field_validation_errors() {
        let body = r#"{"errors":[{"field":"price","defaultMessage":"must be positive"},{"defaultMessage":"bad"}]}"#;
        assert_eq!(
            ApiError::from_response(400, body).message,
            "Error de validación: price: must be positive, bad"
        );
    }

    #[test]
    fn network_errors_have_status_zero() {
        let err = ApiError::network("timeout");
        assert_eq!(err.status, 0);
        assert!(err.message.contains("timeout"));
        assert!(!err.is_unauthorized());
    }
}
