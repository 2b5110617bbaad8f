//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。

mod console;
mod http;
pub mod router;
mod storage;

pub use console::init_logging;
pub use http::FetchHttpClient;
pub use storage::LocalStorage;

/// 浏览器原生确认框；无法弹出时视为取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
