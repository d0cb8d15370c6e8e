//! Assignments page: filterable list with a details modal.
//!
//! Row actions open the modal. Confirming from the modal logs the action and
//! raises an info toast; nothing leaves the page.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::components::assignment_row::{AssignmentRow, AssignmentStatus};
use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::pages::catalog;
use crate::state::records::Assignment;
use crate::state::toasts::{Toast, ToastContext};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AssignmentStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        Self::All,
        Self::Only(AssignmentStatus::Pending),
        Self::Only(AssignmentStatus::Overdue),
        Self::Only(AssignmentStatus::Submitted),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    pub fn matches(self, assignment: &Assignment) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => AssignmentStatus::parse_or_default(&assignment.status) == status,
        }
    }
}

pub fn filter_assignments(assignments: &[Assignment], filter: StatusFilter) -> Vec<Assignment> {
    assignments.iter().filter(|a| filter.matches(a)).cloned().collect()
}

/// Toast text for acting on an assignment, e.g. `"Submit late: Essay"`.
pub fn action_message(assignment: &Assignment) -> String {
    let status = AssignmentStatus::parse_or_default(&assignment.status);
    format!("{}: {}", status.action_label(), assignment.title)
}

/// Warning text when anything is overdue.
pub fn overdue_notice(assignments: &[Assignment]) -> Option<String> {
    let overdue = filter_assignments(assignments, StatusFilter::Only(AssignmentStatus::Overdue)).len();
    match overdue {
        0 => None,
        1 => Some("You have 1 overdue assignment.".to_owned()),
        n => Some(format!("You have {n} overdue assignments.")),
    }
}

pub fn filter_class(active: bool) -> &'static str {
    if active {
        "rounded-full bg-indigo-600 px-3 py-1 text-sm font-medium text-white"
    } else {
        "rounded-full bg-slate-100 px-3 py-1 text-sm font-medium text-slate-600 hover:bg-slate-200 dark:bg-slate-800 dark:text-slate-300"
    }
}

/// Log the action and raise an info toast. Needs a `ToastContext` in scope.
pub fn action_callback() -> Callback<Assignment> {
    let toasts = expect_context::<ToastContext>();
    Callback::new(move |assignment: Assignment| {
        let message = action_message(&assignment);
        leptos::logging::log!("assignment action: {} ({message})", assignment.id);
        toasts.notify(Toast::info(message));
    })
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let all = StoredValue::new(catalog::sample_assignments());
    let filter = RwSignal::new(StatusFilter::All);
    let selected = RwSignal::new(None::<Assignment>);
    let on_action = action_callback();
    let notice = all.with_value(|list| overdue_notice(list));

    let open = Signal::derive(move || selected.with(Option::is_some));
    let close = Callback::new(move |()| selected.set(None));
    let select = Callback::new(move |assignment: Assignment| selected.set(Some(assignment)));

    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-bold text-slate-900 dark:text-slate-100">"Assignments"</h1>
            {notice.map(|message| view! { <Alert tone="warning" title="Heads up" message=message/> })}
            <div class="flex flex-wrap gap-2" role="group" aria-label="Filter by status">
                {StatusFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                type="button"
                                class=move || filter_class(filter.get() == f)
                                aria-pressed=move || (filter.get() == f).to_string()
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Card padding="none" class="px-4">
                <ul>
                    {move || {
                        let visible = all.with_value(|list| filter_assignments(list, filter.get()));
                        if visible.is_empty() {
                            view! { <li class="py-6 text-center text-sm text-slate-500">"No assignments match this filter."</li> }
                                .into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|assignment| view! { <AssignmentRow assignment=assignment on_action=select/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Card>
            <Modal open=open on_close=close title="Assignment details">
                {move || {
                    selected
                        .get()
                        .map(|assignment| {
                            let status = AssignmentStatus::parse_or_default(&assignment.status);
                            let confirm = {
                                let assignment = assignment.clone();
                                Callback::new(move |_: leptos::ev::MouseEvent| {
                                    on_action.run(assignment.clone());
                                    selected.set(None);
                                })
                            };
                            view! {
                                <dl class="grid grid-cols-3 gap-2 text-sm">
                                    <dt class="text-slate-500">"Title"</dt>
                                    <dd class="col-span-2 font-medium">{assignment.title.clone()}</dd>
                                    <dt class="text-slate-500">"Course"</dt>
                                    <dd class="col-span-2">{assignment.course.clone()}</dd>
                                    <dt class="text-slate-500">"Due"</dt>
                                    <dd class="col-span-2">{assignment.due.clone()}</dd>
                                    <dt class="text-slate-500">"Status"</dt>
                                    <dd class="col-span-2">
                                        <span class=status.badge_class()>{status.label()}</span>
                                    </dd>
                                </dl>
                                <div class="mt-6 flex justify-end gap-2">
                                    <Button variant="ghost" on_click=Callback::new(move |_: leptos::ev::MouseEvent| close.run(()))>"Close"</Button>
                                    <Button on_click=confirm>{status.action_label()}</Button>
                                </div>
                            }
                        })
                }}
            </Modal>
        </section>
    }
}
