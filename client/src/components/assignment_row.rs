//! One assignment in a list: title, course, due date and status badge.
//!
//! DESIGN
//! ======
//! Status arrives as free text on the record. It is interpreted here, at the
//! edge of rendering, so unknown values degrade to the pending presentation
//! instead of failing upstream.

#[cfg(test)]
#[path = "assignment_row_test.rs"]
mod assignment_row_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::state::records::Assignment;
use crate::style::{resolve, tables};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssignmentStatus {
    Submitted,
    #[default]
    Pending,
    Overdue,
}

impl AssignmentStatus {
    pub const ALL: [AssignmentStatus; 3] = [Self::Submitted, Self::Pending, Self::Overdue];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    /// Lenient parse: unknown statuses render as `Pending` with a dev diagnostic.
    pub fn parse_or_default(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        if let Some(status) = Self::ALL.into_iter().find(|s| s.as_str() == normalized) {
            return status;
        }
        leptos::logging::debug_warn!("AssignmentRow: unsupported status {value:?}, using \"pending\"");
        Self::Pending
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }

    /// Text of the row's action button.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Submitted => "View",
            Self::Pending => "Submit",
            Self::Overdue => "Submit late",
        }
    }

    pub fn badge_class(self) -> String {
        resolve(&tables::STATUS_BADGE, &[("status", self.as_str())], "")
    }
}

#[component]
pub fn AssignmentRow(
    assignment: Assignment,
    #[prop(optional)] on_action: Option<Callback<Assignment>>,
) -> impl IntoView {
    let status = AssignmentStatus::parse_or_default(&assignment.status);
    let title = assignment.title.clone();
    let course = assignment.course.clone();
    let due = format!("Due {}", assignment.due);
    let action_variant = if status == AssignmentStatus::Submitted { "ghost" } else { "outline" };

    view! {
        <li class="flex items-center justify-between gap-4 border-b border-slate-100 py-3 last:border-b-0 dark:border-slate-700">
            <div class="min-w-0">
                <p class="truncate font-medium text-slate-900 dark:text-slate-100">{title}</p>
                <p class="text-sm text-slate-500">{course} " · " {due}</p>
            </div>
            <div class="flex shrink-0 items-center gap-3">
                <span class=status.badge_class() data-status=status.as_str()>{status.label()}</span>
                {on_action.map(|on_action| {
                    view! {
                        <Button
                            variant=action_variant
                            size="sm"
                            on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_action.run(assignment.clone()))
                        >
                            {status.action_label()}
                        </Button>
                    }
                })}
            </div>
        </li>
    }
}
