//! 通知队列
//!
//! 页面只负责 push，渲染与自动消失由 `components::toast::ToastHost` 负责。

use std::time::Duration;

use leptos::prelude::*;

/// 每条通知停留的时间
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default)]
struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

/// 通知发送端，通过 Context 共享
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, title: &str, description: Option<String>) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: Option<String>) {
        log::warn!("{}: {}", title, description.as_deref().unwrap_or("-"));
        self.push(ToastKind::Error, title, description);
    }

    /// 所属视图已卸载时静默丢弃
    fn push(&self, kind: ToastKind, title: &str, description: Option<String>) {
        self.queue.try_update(|queue| {
            queue.next_id += 1;
            queue.items.push(Toast {
                id: queue.next_id,
                kind,
                title: title.to_string(),
                description,
            });
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|queue| queue.items.retain(|t| t.id != id));
    }

    /// 当前可见的通知（响应式读取）
    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.items.clone())
    }

    /// 非响应式读取，供事件处理与测试使用
    pub fn snapshot(&self) -> Vec<Toast> {
        self.queue.with_untracked(|queue| queue.items.clone())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知发送端
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}
