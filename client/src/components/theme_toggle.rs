//! Header button flipping the light/dark theme.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeContext};

pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    }
}

pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <button
            type="button"
            class="rounded-md p-2 text-slate-600 hover:bg-slate-100 dark:text-slate-300 dark:hover:bg-slate-700"
            aria-label=move || toggle_label(ctx.theme.get())
            title=move || toggle_label(ctx.theme.get())
            on:click=move |_| {
                ctx.toggle_theme();
            }
        >
            {move || toggle_icon(ctx.theme.get())}
        </button>
    }
}
