//! LocalStorage 封装模块
//!
//! 通过 [`KeyValueStore`] 特性抽象持久化存储，浏览器中使用 `gloo-storage`
//! 提供的原始 `Storage` 对象，测试中使用内存实现。

use gloo_storage::{LocalStorage, Storage};

/// 字符串键值存储
pub trait KeyValueStore: Send + Sync {
    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    fn get(&self, key: &str) -> Option<String>;

    /// 设置存储值，成功返回 `true`
    fn set(&self, key: &str, value: &str) -> bool;

    /// 删除存储的键值对，成功返回 `true`
    fn delete(&self, key: &str) -> bool;
}

/// 浏览器 LocalStorage
///
/// 值按原样保存，不经过 JSON 编码（令牌是裸字符串）。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
