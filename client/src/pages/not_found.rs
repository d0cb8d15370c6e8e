//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center gap-4 py-24 text-center">
            <p class="text-5xl font-bold text-indigo-600">"404"</p>
            <h1 class="text-xl font-semibold text-slate-900 dark:text-slate-100">"Page not found"</h1>
            <A href="/" attr:class="text-sm font-medium text-indigo-600 hover:underline">"Back to dashboard"</A>
        </section>
    }
}
