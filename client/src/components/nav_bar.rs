//! Top navigation with plain links and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/courses", "Courses"),
    ("/assignments", "Assignments"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="border-b border-slate-200 bg-white dark:border-slate-700 dark:bg-slate-900">
            <nav class="mx-auto flex h-14 max-w-6xl items-center justify-between px-4">
                <A href="/" attr:class="text-lg font-bold text-indigo-600">"Campus"</A>
                <ul class="flex items-center gap-6 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <A href=*href attr:class="text-slate-600 hover:text-slate-900 aria-[current=page]:text-indigo-600 dark:text-slate-300">
                                        {*label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex items-center gap-2">
                    <A href="/login" attr:class="text-sm font-medium text-slate-600 hover:text-slate-900 dark:text-slate-300">
                        "Sign in"
                    </A>
                    <ThemeToggle/>
                </div>
            </nav>
        </header>
    }
}
