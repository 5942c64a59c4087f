//! 阻塞式确认框
//!
//! 删除等破坏性操作必须先经过一次是/否确认。

/// 确认提示的抽象，便于在测试中替换
pub trait Confirm {
    /// 用户确认返回 `true`
    fn confirm(&self, message: &str) -> bool;
}

/// 使用 `window.confirm` 的浏览器实现
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
