//! 运行时配置
//!
//! 前端在编译期通过环境变量注入后端地址；未设置时使用默认值。

/// 这些是默认值，如果构建时没有设置对应的环境变量，则使用这些值
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端根地址（不含末尾斜杠）
    pub api_base_url: String,
    /// 上传图片的最大字节数
    pub max_image_bytes: usize,
}

impl AppConfig {
    /// 读取构建时的 `STREAMVAULT_API_URL`
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("STREAMVAULT_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            api_base_url,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_and_falls_back_when_blank() {
        assert_eq!(
            AppConfig::with_base_url("https://api.example.com//").api_base_url,
            "https://api.example.com"
        );
        assert_eq!(AppConfig::with_base_url("  ").api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(AppConfig::with_base_url("x").max_image_bytes, 5 * 1024 * 1024);
    }
}
