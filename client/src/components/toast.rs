//! Toast display and the host that renders the shared toast stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastNotice` is a pure view of one `Toast` value with a single close
//! affordance. `ToastHost` is the caller: it reads `ToastContext`, wires each
//! notice's close button to `dismiss`, and in the browser schedules the
//! auto-dismiss for each new entry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::toasts::{self, ToastContext, ToastKind};
use crate::style::{resolve, tables};

/// Icon, classes and ARIA semantics for a toast kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastStyle {
    pub class: String,
    pub icon: &'static str,
    pub role: &'static str,
    pub live: &'static str,
}

pub fn toast_style(kind: ToastKind) -> ToastStyle {
    let class = resolve(&tables::TOAST, &[("kind", kind.as_str())], "");
    let (icon, role, live) = match kind {
        ToastKind::Success => ("✓", "status", "polite"),
        ToastKind::Error => ("✕", "alert", "assertive"),
        ToastKind::Warning => ("⚠", "alert", "assertive"),
        ToastKind::Info => ("ℹ", "status", "polite"),
    };
    ToastStyle { class, icon, role, live }
}

/// Close callback for the stack entry `id`. Running it again after the entry
/// is gone does nothing.
pub fn dismiss_callback(ctx: ToastContext, id: u64) -> Callback<()> {
    Callback::new(move |()| ctx.dismiss(id))
}

/// Click handler that runs `on_close` once per event.
pub fn close_on_click<E>(on_close: Callback<()>) -> impl Fn(E) + Copy {
    move |_| on_close.run(())
}

/// Toast ids with an auto-dismiss timer in flight.
#[derive(Debug, Default)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct DismissSchedule {
    pending: HashSet<u64>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl DismissSchedule {
    /// Mark every id not already pending and return those that are new.
    pub(crate) fn claim_new(&mut self, ids: impl IntoIterator<Item = u64>) -> Vec<u64> {
        ids.into_iter().filter(|id| self.pending.insert(*id)).collect()
    }

    /// Forget `id` once its timer has fired.
    pub(crate) fn finish(&mut self, id: u64) {
        self.pending.remove(&id);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

#[component]
pub fn ToastNotice(toast: toasts::Toast, on_close: Callback<()>) -> impl IntoView {
    let style = toast_style(toast.kind);

    view! {
        <div class=style.class role=style.role aria-live=style.live data-kind=toast.kind.as_str()>
            <span class="shrink-0 text-lg leading-none" aria-hidden="true">{style.icon}</span>
            <p class="flex-1 text-sm">{toast.message}</p>
            <button
                type="button"
                class="shrink-0 rounded p-1 text-current opacity-60 hover:opacity-100"
                aria-label="Dismiss notification"
                on:click=close_on_click(on_close)
            >
                "✕"
            </button>
        </div>
    }
}

/// Fixed-position stack of the toasts held in `ToastContext`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = expect_context::<ToastContext>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled = StoredValue::new(DismissSchedule::default());
        Effect::new(move || {
            let ids: Vec<u64> = ctx.stack.with(|stack| stack.entries().iter().map(|e| e.id).collect());
            let fresh = scheduled.try_update_value(|s| s.claim_new(ids)).unwrap_or_default();
            for id in fresh {
                let delay = std::time::Duration::from_millis(ctx.dismiss_after_ms);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(delay).await;
                    ctx.dismiss(id);
                    scheduled.try_update_value(|s| s.finish(id));
                });
            }
        });
    }

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2">
            <For
                each=move || ctx.stack.get().entries().to_vec()
                key=|entry| entry.id
                children=move |entry| {
                    view! { <ToastNotice toast=entry.toast on_close=dismiss_callback(ctx, entry.id)/> }
                }
            />
        </div>
    }
}
