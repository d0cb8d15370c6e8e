//! Dialog overlay with Escape-to-close.
//!
//! DESIGN
//! ======
//! The modal is either `Closed` or `Open`; there is no animated in-between.
//! A window `keydown` listener exists only while open. `ModalLifecycle` holds
//! it in a `ScopedListener`, so every way out of `Open` (the `open` prop
//! turning false, an Escape press, unmount) releases it, and dropping the
//! lifecycle releases it as a last resort.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

use crate::util::scoped_listener::{ListenerHandle, ScopedListener};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Open/closed state machine owning the key listener registration.
#[derive(Debug)]
pub struct ModalLifecycle<H: ListenerHandle> {
    listener: ScopedListener<H>,
}

impl<H: ListenerHandle> Default for ModalLifecycle<H> {
    fn default() -> Self {
        Self { listener: ScopedListener::default() }
    }
}

impl<H: ListenerHandle> ModalLifecycle<H> {
    pub fn state(&self) -> ModalState {
        if self.listener.is_held() { ModalState::Open } else { ModalState::Closed }
    }

    /// Follow the `open` prop. Returns `true` if the state changed.
    pub fn set_open(&mut self, open: bool, acquire: impl FnOnce() -> H) -> bool {
        if open {
            self.listener.acquire_with(acquire)
        } else {
            self.listener.release()
        }
    }

    /// Handle a key press. Returns `true` when the caller must invoke `on_close`.
    pub fn key_down(&mut self, key: &str) -> bool {
        if self.state() == ModalState::Open && is_escape(key) {
            self.listener.release();
            return true;
        }
        false
    }

    /// Release everything on unmount.
    pub fn teardown(&mut self) {
        self.listener.release();
    }
}

/// `id` for the dialog heading, derived from its title.
pub fn modal_title_id(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { "modal-title".to_owned() } else { format!("modal-{slug}-title") }
}

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let shown = RwSignal::new(open.get_untracked());
    let lifecycle = StoredValue::new(ModalLifecycle::<WindowListenerHandle>::default());

    Effect::new(move || {
        let want = open.get();
        lifecycle.try_update_value(|lc| {
            lc.set_open(want, || {
                window_event_listener(leptos::ev::keydown, move |ev| {
                    let close = lifecycle.try_update_value(|lc| lc.key_down(&ev.key())).unwrap_or(false);
                    if close {
                        ev.prevent_default();
                        shown.set(false);
                        on_close.run(());
                    }
                })
            })
        });
        shown.set(want);
    });

    on_cleanup(move || {
        lifecycle.try_update_value(ModalLifecycle::teardown);
    });

    let title_id = modal_title_id(&title);

    view! {
        <Show when=move || shown.get()>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/50 p-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    class="w-full max-w-lg rounded-lg bg-white p-6 shadow-xl dark:bg-slate-800"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="mb-4 flex items-start justify-between gap-4">
                        <h2 id=title_id.clone() class="text-lg font-semibold text-slate-900 dark:text-slate-100">
                            {title.clone()}
                        </h2>
                        <button
                            type="button"
                            class="rounded p-1 text-slate-500 hover:bg-slate-100 dark:hover:bg-slate-700"
                            aria-label="Close dialog"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
