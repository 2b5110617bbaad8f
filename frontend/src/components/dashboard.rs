use crate::api::browser_api;
use crate::components::layout::{AppShell, ErrorAlert};
use leptos::prelude::*;
use leptos::task::spawn_local;
use lessonbook::shared::{Activity, Lesson, LessonFilter, LessonStatus};
use lessonbook::{ActivityService, LessonService};

const RECENT_ACTIVITY_LIMIT: u32 = 10;
const RECENT_LESSON_COUNT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (lessons, set_lessons) = signal(Vec::<Lesson>::new());
    let (activities, set_activities) = signal(Vec::<Activity>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let api = browser_api();

            match LessonService::new(&api).list(&LessonFilter::default()).await {
                Ok(data) => set_lessons.set(data),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => set_error_msg.set(Some(format!("Could not load lessons: {}", e))),
            }
            // 活动记录只是辅助信息，失败时不覆盖课时错误
            match ActivityService::new(&api).recent(Some(RECENT_ACTIVITY_LIMIT)).await {
                Ok(page) => set_activities.set(page.activities),
                Err(e) => tracing::warn!(error = %e, "could not load activities"),
            }
            set_loading.set(false);
        });
    };

    load();

    let count_status = move |status: LessonStatus| {
        lessons.with(|list| list.iter().filter(|l| l.status == status).count())
    };
    let recent = move || {
        lessons.with(|list| {
            let mut sorted = list.clone();
            sorted.sort_by(|a, b| b.date.cmp(&a.date));
            sorted.truncate(RECENT_LESSON_COUNT);
            sorted
        })
    };

    view! {
        <AppShell title="Dashboard">
            <ErrorAlert message=error_msg.into() />

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total lessons"</div>
                    <div class="stat-value text-primary">{move || lessons.with(Vec::len)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{LessonStatus::Completed.label()}</div>
                    <div class="stat-value text-success">{move || count_status(LessonStatus::Completed)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{LessonStatus::Postponed.label()}</div>
                    <div class="stat-value text-warning">{move || count_status(LessonStatus::Postponed)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{LessonStatus::Cancelled.label()}</div>
                    <div class="stat-value text-error">{move || count_status(LessonStatus::Cancelled)}</div>
                </div>
            </div>

            <div class="grid gap-8 md:grid-cols-2">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Recent lessons"</h3>
                        <Show when=move || loading.get()>
                            <span class="loading loading-spinner"></span>
                        </Show>
                        <ul class="space-y-2">
                            <For each=recent key=|l| l.id let:lesson>
                                <li class="flex justify-between">
                                    <span>{format!("{} · {} · {}", lesson.subject, lesson.class_name, lesson.teacher_name)}</span>
                                    <span class="text-base-content/60">{lesson.date.to_string()}</span>
                                </li>
                            </For>
                        </ul>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Recent activity"</h3>
                        <ul class="space-y-2">
                            <For each=move || activities.get() key=|a| a.id let:activity>
                                <li>
                                    <span class="font-semibold">{activity.performed_by.clone()}</span>
                                    " "
                                    <span>{activity.description.clone()}</span>
                                </li>
                            </For>
                        </ul>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
