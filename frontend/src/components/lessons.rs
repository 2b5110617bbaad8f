use crate::api::browser_api;
use crate::components::layout::{AppShell, ErrorAlert, show_api_error};
use crate::web::confirm;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use lessonbook::shared::{Lesson, LessonDate, LessonFilter};
use lessonbook::{AppRoute, LessonService};

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[component]
pub fn LessonsPage() -> impl IntoView {
    let router = use_router();

    let (lessons, set_lessons) = signal(Vec::<Lesson>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notification, set_notification) = signal(Option::<String>::None);

    // 筛选条件
    let date = RwSignal::new(String::new());
    let teacher = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let class_name = RwSignal::new(String::new());

    let current_filter = move || LessonFilter {
        date: LessonDate::parse(&date.get_untracked()),
        teacher: non_empty(teacher.get_untracked()),
        subject: non_empty(subject.get_untracked()),
        class_name: non_empty(class_name.get_untracked()),
    };

    let load = move || {
        let filter = current_filter();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let api = browser_api();
            match LessonService::new(&api).list(&filter).await {
                Ok(data) => set_lessons.set(data),
                Err(e) => show_api_error(set_error_msg, e),
            }
            set_loading.set(false);
        });
    };

    load();

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let on_reset = move |_| {
        date.set(String::new());
        teacher.set(String::new());
        subject.set(String::new());
        class_name.set(String::new());
        load();
    };

    let handle_delete = move |lesson: Lesson| {
        let prompt = format!(
            "Delete the {} lesson for {} on {}?",
            lesson.subject, lesson.class_name, lesson.date
        );
        if !confirm(&prompt) {
            return;
        }
        let id = lesson.id;
        spawn_local(async move {
            let api = browser_api();
            match LessonService::new(&api).delete(id).await {
                Ok(ack) => {
                    set_lessons.update(|list| list.retain(|l| l.id != id));
                    set_notification.set(Some(
                        ack.message.unwrap_or_else(|| "Lesson deleted".to_string()),
                    ));
                }
                Err(e) => show_api_error(set_error_msg, e),
            }
        });
    };

    let filter_input = |label: &'static str, value: RwSignal<String>, kind: &'static str| {
        view! {
            <label class="form-control">
                <span class="label-text">{label}</span>
                <input
                    type=kind
                    class="input input-bordered input-sm"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </label>
        }
    };

    view! {
        <AppShell title="Lessons">
            <ErrorAlert message=error_msg.into() />
            <Show when=move || notification.get().is_some()>
                <div role="status" class="alert alert-success text-sm py-2">
                    <span>{move || notification.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <form class="card bg-base-100 shadow p-4 flex flex-wrap gap-4 items-end" on:submit=on_search>
                {filter_input("Date", date, "date")}
                {filter_input("Teacher", teacher, "text")}
                {filter_input("Subject", subject, "text")}
                {filter_input("Class", class_name, "text")}
                <button type="submit" class="btn btn-primary btn-sm">"Search"</button>
                <button type="button" class="btn btn-ghost btn-sm" on:click=on_reset>"Reset"</button>
                <Link route=AppRoute::LessonCreate class="btn btn-secondary btn-sm ml-auto">"New lesson"</Link>
            </form>

            <div class="card bg-base-100 shadow-xl overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Teacher"</th>
                            <th>"Subject"</th>
                            <th>"Class"</th>
                            <th class="hidden md:table-cell">"Topic"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get()>
                            <tr>
                                <td colspan="8" class="text-center py-8">
                                    <span class="loading loading-spinner"></span>
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !loading.get() && lessons.with(Vec::is_empty)>
                            <tr>
                                <td colspan="8" class="text-center py-8 text-base-content/50">
                                    "No lessons match these filters."
                                </td>
                            </tr>
                        </Show>
                        <For each=move || lessons.get() key=|l| l.id let:lesson>
                            {
                                let id = lesson.id;
                                let for_delete = lesson.clone();
                                view! {
                                    <tr>
                                        <td>{lesson.date.to_string()}</td>
                                        <td>{format!("{} - {}", lesson.start_time, lesson.end_time)}</td>
                                        <td>{lesson.teacher_name.clone()}</td>
                                        <td>{lesson.subject.clone()}</td>
                                        <td>{lesson.class_name.clone()}</td>
                                        <td class="hidden md:table-cell">{lesson.topic.clone()}</td>
                                        <td><span class="badge">{lesson.status.label()}</span></td>
                                        <td class="flex gap-2">
                                            <button
                                                class="btn btn-ghost btn-xs"
                                                on:click=move |_| router.navigate_route(AppRoute::LessonEdit(id))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-xs text-error"
                                                on:click=move |_| handle_delete(for_delete.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </div>
        </AppShell>
    }
}
