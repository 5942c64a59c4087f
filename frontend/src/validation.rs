//! 表单本地校验
//!
//! 校验在发起任何网络请求之前完成；失败时不会调用后端。

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidateEmail;

/// 字段名 → 错误信息
pub type FieldErrors = BTreeMap<&'static str, String>;

/// 单条本地校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// 出错的字段；表单级错误为 `None`
    pub field: Option<&'static str>,
    pub message: String,
}

impl ValidationError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn into_field_errors(self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(field) = self.field {
            errors.insert(field, self.message);
        }
        errors
    }
}

/// 邮箱格式检查（HTML5 规则），忽略首尾空白
pub fn is_valid_email(value: &str) -> bool {
    value.trim().validate_email()
}

/// 下拉框选中的 id；占位值（空串、`0`）视为未选择
pub fn selected_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// 必填文本，返回去除首尾空白后的值
pub fn required(field: &'static str, value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::field(field, message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// 必选下拉框
pub fn required_id(field: &'static str, value: &str, message: &str) -> Result<i64, ValidationError> {
    selected_id(value).ok_or_else(|| ValidationError::field(field, message))
}

/// 可选文本：空白视为缺省
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_decimal(field: &'static str, value: &str, message: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::field(field, message))
}

pub fn parse_integer(field: &'static str, value: &str, message: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::field(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", " jane.doe@example.com ", "x+y@mail.example.org"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "jane", "@b.co", "a@", "a b@c.co", "a@b@c.co"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn placeholder_selections_are_not_ids() {
        assert_eq!(selected_id("3"), Some(3));
        assert_eq!(selected_id(" 12 "), Some(12));
        assert_eq!(selected_id("0"), None);
        assert_eq!(selected_id(""), None);
        assert_eq!(selected_id("abc"), None);
    }

    #[test]
    fn numeric_fields_accept_comma_decimals() {
        assert_eq!(parse_decimal("price", "9,99", "x"), Ok(9.99));
        assert_eq!(parse_decimal("price", "12.5", "x"), Ok(12.5));
        assert!(parse_decimal("price", "gratis", "x").is_err());
        assert_eq!(parse_integer("duration", " 30 ", "x"), Ok(30));
        assert_eq!(
            parse_integer("duration", "1.5", "Duración inválida"),
            Err(ValidationError::field("duration", "Duración inválida"))
        );
    }
}
