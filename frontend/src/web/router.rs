//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API：所有对 window.history 的操作都集中在此模块。
//! 每次导航都交给核心库的 `SessionGuard` 决定落点，
//! 实现"监听 -> 守卫 -> 落点 -> 加载"的导航流程。

use leptos::prelude::*;
use lessonbook::{AppRoute, SessionGuard};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向时替换，避免后退回到被拒绝的页面
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入的 token 检查函数实现与会话存储的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    guard: RwSignal<SessionGuard>,
    /// 同步读取本地是否持有 token
    has_token: fn() -> bool,
}

impl RouterService {
    fn new(has_token: fn() -> bool) -> Self {
        Self {
            current_route: RwSignal::new(AppRoute::default()),
            guard: RwSignal::new(SessionGuard::new()),
            has_token,
        }
    }

    pub fn current_route(&self) -> Signal<AppRoute> {
        self.current_route.into()
    }

    /// 守卫是否已给出结论
    pub fn may_render(&self) -> Signal<bool> {
        let guard = self.guard;
        Signal::derive(move || guard.with(SessionGuard::may_render))
    }

    /// **核心方法：导航与守卫**
    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 false 时用于首次加载与 popstate，只修正地址栏。
    fn navigate_to_route(&self, requested: AppRoute, use_push: bool) {
        let has_token = (self.has_token)();
        let mut guard = self.guard.get_untracked();
        let resolution = guard.settle(has_token, requested);
        self.guard.set(guard);

        let path = resolution.route.to_path();
        if resolution.redirected {
            tracing::debug!(from = %requested, to = %path, "navigation redirected");
            replace_history_state(&path);
        } else if use_push {
            push_history_state(&path);
        }
        self.current_route.set(resolution.route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to_route(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并按当前地址完成首次导航
fn provide_router(has_token: fn() -> bool) -> RouterService {
    let router = RouterService::new(has_token);
    router.init_popstate_listener();
    provide_context(router);

    router.navigate_to_route(AppRoute::from_path(&current_path()), false);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// token 检查函数
    has_token: fn() -> bool,
    children: Children,
) -> impl IntoView {
    provide_router(has_token);

    children()
}

/// 路由出口组件
///
/// 守卫给出结论前只显示加载占位。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let may_render = router.may_render();

    move || {
        if may_render.get() {
            matcher(router.current_route().get())
        } else {
            view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any()
        }
    }
}

/// 站内链接：拦截点击改走路由服务
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_route(route);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
