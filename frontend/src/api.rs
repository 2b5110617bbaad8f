//! 浏览器端装配
//!
//! 把 fetch 传输、LocalStorage 与跳转监听者装进核心库的 `ApiService`。
//! 各组件都是无状态的单元结构体，因此每次调用时按需构造即可。

use crate::web::{FetchHttpClient, LocalStorage};
use lessonbook::config::{VAR_API_BASE, VAR_TOKEN_KEY, VAR_USER_KEY};
use lessonbook::{AppRoute, ApiService, ClientConfig, Session, SessionEvent, SessionListener};

pub type BrowserSession = Session<LocalStorage, BrowserSessionListener>;
pub type BrowserApi = ApiService<FetchHttpClient, LocalStorage, BrowserSessionListener>;

/// 编译期配置（`LESSONBOOK_API_BASE` 等），未设置时使用默认值
pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|name| {
        let value = match name {
            VAR_API_BASE => option_env!("LESSONBOOK_API_BASE"),
            VAR_TOKEN_KEY => option_env!("LESSONBOOK_TOKEN_KEY"),
            VAR_USER_KEY => option_env!("LESSONBOOK_USER_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

pub fn browser_session() -> BrowserSession {
    Session::new(
        LocalStorage,
        BrowserSessionListener,
        client_config().storage,
    )
}

pub fn browser_api() -> BrowserApi {
    ApiService::new(FetchHttpClient, client_config(), browser_session())
}

/// 会话失效或注销时整页跳转到登录页
///
/// 整页加载会丢弃所有内存状态，避免残留的用户数据继续显示。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionListener;

impl SessionListener for BrowserSessionListener {
    fn on_session_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::Established => {}
            SessionEvent::Ended | SessionEvent::Invalidated => {
                let target = AppRoute::auth_failure_redirect().to_path();
                tracing::info!(?event, %target, "leaving authenticated area");
                let navigated = web_sys::window()
                    .map(|w| w.location().set_href(&target).is_ok())
                    .unwrap_or(false);
                if !navigated {
                    tracing::error!("hard navigation to login failed");
                }
            }
        }
    }
}
