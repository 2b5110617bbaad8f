mod form_state;

use crate::api::browser_api;
use crate::auth::use_auth;
use crate::components::layout::{AppShell, ErrorAlert, show_api_error};
use crate::web::router::use_router;
use form_state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lessonbook::shared::{LessonPatch, LessonStatus};
use lessonbook::{AppRoute, LessonService};

/// 新建与编辑共用的表单页；`lesson_id` 为 `None` 时新建
#[component]
pub fn LessonFormPage(lesson_id: Option<u64>) -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let form = FormState::new();

    let (loading, set_loading) = signal(lesson_id.is_some());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    match lesson_id {
        Some(id) => spawn_local(async move {
            let api = browser_api();
            match LessonService::new(&api).get(id).await {
                Ok(lesson) => form.fill(&lesson),
                Err(e) => show_api_error(set_error_msg, e),
            }
            set_loading.set(false);
        }),
        // 新建时默认填入当前用户
        None => {
            if let Some(user) = auth.user.get_untracked() {
                form.teacher_name.set(user.name);
            }
        }
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = match form.draft().validate() {
            Ok(input) => input,
            Err(msg) => {
                set_error_msg.set(Some(msg));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let api = browser_api();
            let service = LessonService::new(&api);
            let result = match lesson_id {
                Some(id) => service.update(id, &LessonPatch::from(input)).await,
                None => service.create(&input).await,
            };
            match result {
                Ok(lesson) => {
                    tracing::info!(id = lesson.id, "lesson saved");
                    router.navigate_route(AppRoute::Lessons);
                }
                Err(e) => show_api_error(set_error_msg, e),
            }
            set_is_submitting.set(false);
        });
    };

    let title = if lesson_id.is_some() { "Edit lesson" } else { "New lesson" };

    let text_field = |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    class="input input-bordered"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </div>
        }
    };

    view! {
        <AppShell title=title>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body grid gap-4 md:grid-cols-2" on:submit=on_submit>
                        <div class="md:col-span-2">
                            <ErrorAlert message=error_msg.into() />
                        </div>

                        {text_field("teacher_name", "Teacher", "text", form.teacher_name)}
                        {text_field("subject", "Subject", "text", form.subject)}
                        {text_field("class_name", "Class", "text", form.class_name)}
                        {text_field("date", "Date", "date", form.date)}
                        {text_field("start_time", "Start time", "time", form.start_time)}
                        {text_field("end_time", "End time", "time", form.end_time)}
                        {text_field("topic", "Topic", "text", form.topic)}
                        {text_field("evidence", "Evidence link", "url", form.evidence)}

                        <div class="form-control">
                            <label class="label" for="status">
                                <span class="label-text">"Status"</span>
                            </label>
                            <select
                                id="status"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    if let Some(status) = LessonStatus::from_wire(&event_target_value(&ev)) {
                                        form.status.set(status);
                                    }
                                }
                                prop:value=move || form.status.get().wire_value()
                            >
                                {LessonStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.wire_value()>{s.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-control md:col-span-2">
                            <label class="label" for="note">
                                <span class="label-text">"Note"</span>
                            </label>
                            <textarea
                                id="note"
                                class="textarea textarea-bordered"
                                on:input=move |ev| form.note.set(event_target_value(&ev))
                                prop:value=form.note
                            ></textarea>
                        </div>

                        <div class="md:col-span-2 flex gap-2 justify-end">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate_route(AppRoute::Lessons)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </AppShell>
    }
}
