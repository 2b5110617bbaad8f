use crate::auth::{register, use_auth};
use crate::components::layout::{ErrorAlert, show_api_error};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use lessonbook::AppRoute;
use lessonbook::shared::Role;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Teacher);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || email.get().trim().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        // 与后端校验规则一致
        if password.get().len() < MIN_PASSWORD_LEN {
            set_error_msg.set(Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = register(
                auth,
                name.get_untracked().trim().to_string(),
                email.get_untracked().trim().to_string(),
                password.get_untracked(),
                role.get_untracked(),
            )
            .await;
            match result {
                Ok(_) => router.navigate_route(AppRoute::auth_success_redirect()),
                Err(e) => show_api_error(set_error_msg, e),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create an account"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg.into() />

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="role">
                                <span class="label-text">"Role"</span>
                            </label>
                            <select
                                id="role"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    if let Some(r) = Role::from_str_opt(&event_target_value(&ev)) {
                                        set_role.set(r);
                                    }
                                }
                                prop:value=move || role.get().as_str()
                            >
                                <option value="teacher">"Teacher"</option>
                                <option value="supervisor">"Supervisor"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registering..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? "
                            <Link route=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
