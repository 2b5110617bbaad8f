//! 认证模块
//!
//! 凭据本身由核心库的会话持有者保存在 LocalStorage 中，
//! 这里只保存当前用户的内存副本供页面显示。
//! 路由守卫直接读取 token 是否存在，不依赖这里的信号。

use crate::api::{browser_api, browser_session};
use lessonbook::shared::{Role, User};
use lessonbook::{ApiResult, AuthService};
use leptos::prelude::*;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// 从已保存的会话恢复用户信息
    pub fn new() -> Self {
        let user = RwSignal::new(browser_session().user());
        let is_authenticated = Signal::derive(move || user.get().is_some());
        Self {
            user,
            is_authenticated,
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}

/// 登录成功后更新内存中的用户，跳转由调用方通过路由完成
pub async fn login(ctx: AuthContext, email: String, password: String) -> ApiResult<User> {
    let api = browser_api();
    let credential = AuthService::new(&api).login(&email, &password).await?;
    ctx.user.set(Some(credential.user.clone()));
    Ok(credential.user)
}

pub async fn register(
    ctx: AuthContext,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> ApiResult<User> {
    let api = browser_api();
    let credential = AuthService::new(&api)
        .register(&name, &email, &password, role)
        .await?;
    ctx.user.set(Some(credential.user.clone()));
    Ok(credential.user)
}

/// 注销：清除凭据，会话监听者负责整页跳转
pub fn logout(ctx: AuthContext) {
    ctx.user.set(None);
    let api = browser_api();
    AuthService::new(&api).logout();
}
