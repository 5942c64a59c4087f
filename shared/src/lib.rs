use serde::{Deserialize, Serialize};

pub mod entities;
pub mod error;
pub mod protocol;

pub use error::ApiError;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 角色字符串中授予管理权限的标记（大小写不敏感的子串匹配）
pub const ADMIN_MARKER: &str = "ADMIN";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 会话模型 (Session Models)
// =========================================================

/// 客户端持有的登录身份
///
/// `email` 保存的是用户登录时输入的标识（邮箱或用户名均可），
/// `name` 与 `role` 来自服务端的登录响应。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl Session {
    /// 角色是否包含管理员标记
    ///
    /// `"ROLE_ADMIN"`、`"admin"`、`"ADMIN"` 均视为管理员。
    pub fn is_admin(&self) -> bool {
        self.role.to_uppercase().contains(ADMIN_MARKER)
    }
}

/// 登录表单输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// 邮箱或用户名
    pub identifier: String,
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.identifier.clone(),
            password: credentials.secret.clone(),
        }
    }
}

/// 登录响应
///
/// 后端不同版本使用 `displayName`/`role` 或 `nombreCompleto`/`rol`，两者都接受。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, alias = "nombreCompleto")]
    pub display_name: String,
    #[serde(default, alias = "rol")]
    pub role: String,
}

/// 注册请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub document_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub first_last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    pub document_type_id: i64,
    pub sex_id: i64,
    pub city_id: i64,
}

/// 仅携带 id 的交叉引用，如 `{"id": 3}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

impl From<i64> for IdRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_role(role: &str) -> Session {
        Session {
            email: "jdoe".to_string(),
            name: "Jane Doe".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_marker_matches_case_insensitively_anywhere_in_role() {
        for role in ["ADMIN", "ROLE_ADMIN", "admin", "role_admin,ROLE_USER"] {
            assert!(session_with_role(role).is_admin(), "{role} should be admin");
        }
        for role in ["USER", "ROLE_USER", ""] {
            assert!(!session_with_role(role).is_admin(), "{role} should not be admin");
        }
    }

    #[test]
    fn login_response_accepts_both_field_spellings() {
        let english: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","displayName":"Jane Doe","role":"ROLE_USER"}"#)
                .unwrap();
        let spanish: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","nombreCompleto":"Jane Doe","rol":"ROLE_USER"}"#)
                .unwrap();
        assert_eq!(english, spanish);
        assert_eq!(english.display_name, "Jane Doe");
    }

    #[test]
    fn login_request_maps_identifier_to_username() {
        let credentials = Credentials {
            identifier: "jdoe".to_string(),
            secret: "pw".to_string(),
        };
        let body = serde_json::to_value(LoginRequest::from(&credentials)).unwrap();
        assert_eq!(body, serde_json::json!({"username": "jdoe", "password": "pw"}));
    }

    #[test]
    fn register_request_omits_missing_second_names() {
        let body = serde_json::to_value(RegisterRequest {
            username: "jdoe".into(),
            document_type_id: 1,
            sex_id: 2,
            city_id: 3,
            ..Default::default()
        })
        .unwrap();
        assert!(body.get("secondName").is_none());
        assert_eq!(body["documentTypeId"], 1);
        assert_eq!(body["cityId"], 3);
    }
}
