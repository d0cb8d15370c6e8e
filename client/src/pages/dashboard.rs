//! Dashboard page: headline stats, current courses and upcoming work.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::assignment_row::{AssignmentRow, AssignmentStatus};
use crate::components::card::Card;
use crate::components::course_card::CourseCard;
use crate::components::stat_card::StatCard;
use crate::pages::assignments::action_callback;
use crate::pages::catalog;
use crate::state::records::{Assignment, User};

/// Courses shown before the "View all" link.
pub const COURSE_PREVIEW: usize = 3;

pub fn greeting(user: &User) -> String {
    let first = user.name.split_whitespace().next().unwrap_or("there");
    format!("Welcome back, {first}")
}

/// Assignments still needing action, overdue first.
pub fn upcoming(assignments: Vec<Assignment>) -> Vec<Assignment> {
    let mut open: Vec<_> = assignments
        .into_iter()
        .filter(|a| AssignmentStatus::parse_or_default(&a.status) != AssignmentStatus::Submitted)
        .collect();
    open.sort_by_key(|a| AssignmentStatus::parse_or_default(&a.status) != AssignmentStatus::Overdue);
    open
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = catalog::sample_user();
    let courses = catalog::sample_courses().into_iter().take(COURSE_PREVIEW).collect::<Vec<_>>();
    let upcoming = upcoming(catalog::sample_assignments());
    let on_action = action_callback();

    view! {
        <section class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-slate-900 dark:text-slate-100">{greeting(&user)}</h1>
                <p class="text-sm text-slate-500">"Here is what is happening across your courses."</p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {catalog::STATS
                    .iter()
                    .map(|s| view! { <StatCard label=s.label value=s.value tone=s.tone hint=s.hint/> })
                    .collect_view()}
            </div>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold">"My Courses"</h2>
                    <A href="/courses" attr:class="text-sm font-medium text-indigo-600 hover:underline">
                        "View all"
                    </A>
                </div>
                <div class="grid gap-4 md:grid-cols-3">
                    {courses.into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                </div>
            </div>
            <Card title="Upcoming Assignments" padding="none" class="overflow-hidden">
                <ul class="px-4">
                    {upcoming
                        .into_iter()
                        .map(|assignment| view! { <AssignmentRow assignment=assignment on_action=on_action/> })
                        .collect_view()}
                </ul>
            </Card>
        </section>
    }
}
