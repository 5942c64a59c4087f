//! 公共页面的表单模型
//!
//! 表单值全部以字符串持有（与输入框一一对应），提交时统一校验并转换。

use streamvault_shared::entities::{City, DocumentType, Sex};
use streamvault_shared::protocol::{CITIES, DOCUMENT_TYPES, SEXES};
use streamvault_shared::{ApiError, Credentials, RegisterRequest};

use crate::api::{Access, ApiClient};
use crate::validation::{
    FieldErrors, ValidationError, is_valid_email, optional, required, required_id,
};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const MESSAGE_MAX: usize = 1000;
pub const PASSWORD_MIN: usize = 6;

fn collect<T>(errors: &mut FieldErrors, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            if let Some(field) = err.field {
                errors.entry(field).or_insert(err.message);
            }
            None
        }
    }
}

fn email_field(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if !is_valid_email(value) || value.chars().count() > EMAIL_MAX {
        return Err(ValidationError::field(field, "Correo inválido"));
    }
    Ok(value.to_string())
}

fn bounded(
    field: &'static str,
    value: &str,
    max: usize,
    missing: &str,
    too_long: &str,
) -> Result<String, ValidationError> {
    let value = required(field, value, missing)?;
    if value.chars().count() > max {
        return Err(ValidationError::field(field, too_long));
    }
    Ok(value)
}

// =========================================================
// 登录
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Result<Credentials, ValidationError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() || self.password.is_empty() {
            return Err(ValidationError::form("Completa todos los campos"));
        }
        Ok(Credentials {
            identifier: identifier.to_string(),
            secret: self.password.clone(),
        })
    }
}

// =========================================================
// 联系我们
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// 返回所有字段的错误，而不是只返回第一个
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        collect(
            &mut errors,
            bounded("name", &self.name, NAME_MAX, "Nombre requerido", "Nombre demasiado largo"),
        );
        collect(&mut errors, email_field("email", &self.email));
        collect(
            &mut errors,
            bounded(
                "message",
                &self.message,
                MESSAGE_MAX,
                "Mensaje requerido",
                "Mensaje demasiado largo",
            ),
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// =========================================================
// 找回密码
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<String, ValidationError> {
        email_field("email", &self.email)
    }
}

// =========================================================
// 注册
// =========================================================

/// 注册表单；三个下拉框以字符串形式保存选中的 id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub document_number: String,
    pub first_name: String,
    pub second_name: String,
    pub first_last_name: String,
    pub second_last_name: String,
    pub document_type_id: String,
    pub sex_id: String,
    pub city_id: String,
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = collect(&mut errors, required("username", &self.username, "Usuario requerido"));
        let email = collect(&mut errors, email_field("email", &self.email));
        let password = if self.password.chars().count() < PASSWORD_MIN {
            errors.insert(
                "password",
                format!("La contraseña debe tener al menos {PASSWORD_MIN} caracteres"),
            );
            None
        } else {
            Some(self.password.clone())
        };
        let document_number = collect(
            &mut errors,
            required("document_number", &self.document_number, "Documento requerido"),
        );
        let first_name = collect(
            &mut errors,
            required("first_name", &self.first_name, "Nombre requerido"),
        );
        let first_last_name = collect(
            &mut errors,
            required("first_last_name", &self.first_last_name, "Apellido requerido"),
        );
        let document_type_id = collect(
            &mut errors,
            required_id("document_type_id", &self.document_type_id, "Selecciona un tipo de documento"),
        );
        let sex_id = collect(&mut errors, required_id("sex_id", &self.sex_id, "Selecciona un sexo"));
        let city_id = collect(&mut errors, required_id("city_id", &self.city_id, "Selecciona una ciudad"));

        match (
            username,
            email,
            password,
            document_number,
            first_name,
            first_last_name,
            document_type_id,
            sex_id,
            city_id,
        ) {
            (
                Some(username),
                Some(email),
                Some(password),
                Some(document_number),
                Some(first_name),
                Some(first_last_name),
                Some(document_type_id),
                Some(sex_id),
                Some(city_id),
            ) if errors.is_empty() => Ok(RegisterRequest {
                username,
                email,
                password,
                document_number,
                first_name,
                second_name: optional(&self.second_name),
                first_last_name,
                second_last_name: optional(&self.second_last_name),
                document_type_id,
                sex_id,
                city_id,
            }),
            _ => Err(errors),
        }
    }
}

/// 注册页下拉框的参考数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterLookups {
    pub document_types: Vec<DocumentType>,
    pub sexes: Vec<Sex>,
    pub cities: Vec<City>,
}

impl RegisterLookups {
    /// 注册前尚无会话，参考数据以无凭据方式获取
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        Ok(Self {
            document_types: client.find_all(&DOCUMENT_TYPES, Access::Public).await?,
            sexes: client.find_all(&SEXES, Access::Public).await?,
            cities: client.find_all(&CITIES, Access::Public).await?,
        })
    }
}
