use crate::auth::{logout, use_auth};
use crate::web::router::Link;
use leptos::prelude::*;
use lessonbook::{ApiError, AppRoute};

/// 已登录页面的外框：导航栏 + 内容区
#[component]
pub fn AppShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();

    let user_label = move || {
        auth.user
            .get()
            .map(|u| format!("{} ({})", u.name, u.role))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Link route=AppRoute::Dashboard class="btn btn-ghost text-xl">"Lessonbook"</Link>
                        <Link route=AppRoute::Lessons class="btn btn-ghost">"Lessons"</Link>
                        <Link route=AppRoute::LessonCreate class="btn btn-ghost">"New lesson"</Link>
                    </div>
                    <div class="flex-none gap-2">
                        <Show when=move || auth.is_authenticated.get()>
                            <span class="badge badge-neutral hidden md:inline-flex">{user_label}</span>
                        </Show>
                        <button on:click=move |_| logout(auth) class="btn btn-outline btn-error">
                            "Log out"
                        </button>
                    </div>
                </div>

                <h1 class="text-2xl font-bold">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

/// 把接口错误写入页面的错误信号
///
/// 401 已经触发跳转到登录页，不再显示。
pub fn show_api_error(target: WriteSignal<Option<String>>, error: ApiError) {
    if error.is_unauthorized() {
        return;
    }
    target.set(Some(error.to_string()));
}

/// 行内错误提示
#[component]
pub fn ErrorAlert(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
