//! 图片上传编码
//!
//! 后端只接受 base64 文本加独立的 content-type 字段，不接受 multipart。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("El archivo es demasiado grande. Máximo {} MB.", .max / (1024 * 1024))]
    TooLarge { size: usize, max: usize },
    #[error("El archivo está vacío.")]
    Empty,
    #[error("El archivo no es una imagen.")]
    NotAnImage,
    #[error("No se pudo leer el archivo: {0}")]
    Read(String),
}

/// 编码后的图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// base64 内容，不含 `data:` 前缀
    pub data: String,
    pub content_type: String,
}

/// 校验大小与类型后编码为 base64
pub fn encode_image(
    bytes: &[u8],
    content_type: &str,
    max_bytes: usize,
) -> Result<EncodedImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }
    if !content_type.starts_with("image/") {
        return Err(ImageError::NotAnImage);
    }
    Ok(EncodedImage {
        data: STANDARD.encode(bytes),
        content_type: content_type.to_string(),
    })
}

/// 生成可直接用于 `<img src>` 的 data URL
pub fn data_url(data: &str, content_type: &str) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    let content_type = if content_type.is_empty() {
        "image/jpeg"
    } else {
        content_type
    };
    Some(format!("data:{content_type};base64,{data}"))
}
