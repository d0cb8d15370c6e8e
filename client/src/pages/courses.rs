//! Course catalogue grid and per-course detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::assignment_row::AssignmentRow;
use crate::components::card::Card;
use crate::components::course_card::{CourseCard, lesson_label, progress_label};
use crate::components::input::Input;
use crate::pages::assignments::action_callback;
use crate::pages::catalog;
use crate::pages::not_found::NotFoundPage;
use crate::state::records::Course;

/// Case-insensitive match on code, title or instructor. Blank keeps all.
pub fn filter_courses(courses: &[Course], query: &str) -> Vec<Course> {
    let needle = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|c| {
            needle.is_empty()
                || [&c.code, &c.title, &c.instructor]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let all = StoredValue::new(catalog::sample_courses());
    let query = RwSignal::new(String::new());

    view! {
        <section class="space-y-6">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <h1 class="text-2xl font-bold text-slate-900 dark:text-slate-100">"Courses"</h1>
                <div class="w-full max-w-xs">
                    <Input
                        label="Search courses"
                        name="course search"
                        input_type="search"
                        placeholder="Code, title or instructor"
                        size="sm"
                        value=query
                        on_input=Callback::new(move |v| query.set(v))
                    />
                </div>
            </div>
            {move || {
                let visible = all.with_value(|list| query.with(|q| filter_courses(list, q)));
                if visible.is_empty() {
                    view! { <p class="text-sm text-slate-500">"No courses match your search."</p> }.into_any()
                } else {
                    view! {
                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                            {visible.into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let on_action = action_callback();

    move || {
        let Some(course) = params.read().get("id").and_then(|id| catalog::find_course(&id)) else {
            return view! { <NotFoundPage/> }.into_any();
        };
        let assignments = catalog::assignments_for(&course.code);
        view! {
            <section class="space-y-6">
                <A href="/courses" attr:class="text-sm text-indigo-600 hover:underline">"← All courses"</A>
                <div>
                    <p class="text-sm font-semibold uppercase tracking-wide text-indigo-600">{course.code.clone()}</p>
                    <h1 class="text-2xl font-bold text-slate-900 dark:text-slate-100">{course.title.clone()}</h1>
                    <p class="text-sm text-slate-500">
                        {course.instructor.clone()} " · " {lesson_label(course.lessons)} " · " {progress_label(&course)}
                    </p>
                </div>
                <Card title="Assignments" class="px-4" padding="none">
                    <ul>
                        {assignments
                            .into_iter()
                            .map(|assignment| view! { <AssignmentRow assignment=assignment on_action=on_action/> })
                            .collect_view()}
                    </ul>
                </Card>
            </section>
        }
            .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock::{mock_course, mock_course_with};

    fn sample() -> Vec<Course> {
        vec![
            mock_course(),
            mock_course_with(|c| {
                c.id = "course-2".to_owned();
                c.code = "ART 120".to_owned();
                c.title = "Drawing Fundamentals".to_owned();
                c.instructor = "Prof. Mendes".to_owned();
            }),
        ]
    }

    #[test]
    fn blank_query_keeps_all_courses() {
        assert_eq!(filter_courses(&sample(), "  ").len(), 2);
    }

    #[test]
    fn query_matches_any_field_case_insensitively() {
        let by_code = filter_courses(&sample(), "art");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, "course-2");

        let by_instructor = filter_courses(&sample(), "RIVERA");
        assert_eq!(by_instructor[0].id, "course-1");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(filter_courses(&sample(), "chemistry").is_empty());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn courses_page_renders_every_sample_course() {
        let html = crate::testing::render_with_providers("/courses", || view! { <CoursesPage/> });
        for course in catalog::sample_courses() {
            assert!(html.contains(&course.title), "{}", course.title);
        }
    }
}
