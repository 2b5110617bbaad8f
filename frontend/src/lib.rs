//! Lessonbook 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `lessonbook` 核心库：路由模型、会话守卫、API 服务
//! - `web`: 浏览器实现（fetch、LocalStorage、History、console）
//! - `auth`: 当前用户的内存状态
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod layout;
    pub mod lesson_form;
    pub mod lessons;
    pub mod login;
    pub mod register;
}
pub mod web;

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::lesson_form::LessonFormPage;
use crate::components::lessons::LessonsPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;
use lessonbook::AppRoute;
use web::router::{Link, Router, RouterOutlet};

fn has_token() -> bool {
    api::browser_session().has_credential()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Lessons => view! { <LessonsPage /> }.into_any(),
        AppRoute::LessonCreate => view! { <LessonFormPage lesson_id=None /> }.into_any(),
        AppRoute::LessonEdit(id) => view! { <LessonFormPage lesson_id=Some(id) /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
        AppRoute::AuthNotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link route=AppRoute::Login class="btn btn-primary mt-6">"Back to login"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AuthContext::new());

    view! {
        <Router has_token=has_token>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
