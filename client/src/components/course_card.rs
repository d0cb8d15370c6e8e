//! Course tile with instructor, lesson count and a progress bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::card::Card;
use crate::state::records::Course;

pub fn course_href(course: &Course) -> String {
    format!("/courses/{}", course.id)
}

pub fn progress_label(course: &Course) -> String {
    format!("{}% complete", course.clamped_progress())
}

pub fn lesson_label(lessons: u32) -> String {
    match lessons {
        1 => "1 lesson".to_owned(),
        n => format!("{n} lessons"),
    }
}

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let progress = course.clamped_progress();
    let href = course_href(&course);
    let label = progress_label(&course);
    let lessons = lesson_label(course.lessons);

    view! {
        <Card class="flex flex-col gap-3">
            <div class="flex items-center justify-between">
                <span class="text-xs font-semibold uppercase tracking-wide text-indigo-600">{course.code}</span>
                <span class="text-xs text-slate-500">{lessons}</span>
            </div>
            <A href=href attr:class="text-lg font-semibold text-slate-900 hover:underline dark:text-slate-100">
                {course.title}
            </A>
            <p class="text-sm text-slate-500">{course.instructor}</p>
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-slate-100 dark:bg-slate-700"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=progress.to_string()
            >
                <div class="h-full rounded-full bg-indigo-600" style=format!("width: {progress}%")></div>
            </div>
            <p class="text-xs text-slate-500">{label}</p>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock::{mock_course, mock_course_with};

    #[test]
    fn course_href_uses_id() {
        assert_eq!(course_href(&mock_course()), "/courses/course-1");
    }

    #[test]
    fn progress_label_clamps() {
        let course = mock_course_with(|c| c.progress = 250);
        assert_eq!(progress_label(&course), "100% complete");
    }

    #[test]
    fn lesson_label_pluralizes() {
        assert_eq!(lesson_label(1), "1 lesson");
        assert_eq!(lesson_label(0), "0 lessons");
        assert_eq!(lesson_label(12), "12 lessons");
    }
}
