//! 浏览器 API 封装模块
//!
//! 所有直接触碰 `window` 的代码都集中在这里；上层模块只依赖
//! `Transport`、`KeyValueStore`、`Confirm` 等抽象，便于在原生环境中测试。

mod console;
mod dialog;
mod file;
mod http;
pub mod route;
pub mod router;
mod storage;

pub use console::init_logging;
pub use dialog::{BrowserConfirm, Confirm};
pub use file::read_first_file;
pub use http::FetchTransport;
pub use router::hard_navigate;
pub use storage::{BrowserStorage, KeyValueStore};
