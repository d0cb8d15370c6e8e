//! Placeholder shapes shown while content is not yet available.

use leptos::prelude::*;

const LINE_WIDTHS: &[&str] = &["w-full", "w-11/12", "w-5/6", "w-full", "w-4/5"];
const LAST_LINE_WIDTH: &str = "w-2/3";

/// Width classes for a paragraph of `lines` placeholder lines.
///
/// The cycle is fixed so SSR and hydration agree; multi-line blocks end short.
pub fn skeleton_line_widths(lines: usize) -> Vec<&'static str> {
    let mut widths: Vec<_> = LINE_WIDTHS.iter().copied().cycle().take(lines).collect();
    if lines > 1 {
        if let Some(last) = widths.last_mut() {
            *last = LAST_LINE_WIDTH;
        }
    }
    widths
}

#[component]
pub fn SkeletonLine(#[prop(default = "w-full")] width: &'static str, #[prop(default = "h-4")] height: &'static str) -> impl IntoView {
    view! { <div class=format!("animate-pulse rounded bg-slate-200 dark:bg-slate-700 {height} {width}")></div> }
}

#[component]
pub fn SkeletonText(#[prop(default = 3)] lines: usize) -> impl IntoView {
    view! {
        <div class="space-y-2" aria-hidden="true">
            {skeleton_line_widths(lines)
                .into_iter()
                .map(|width| view! { <SkeletonLine width=width/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="rounded-lg border border-slate-200 p-5 dark:border-slate-700" aria-busy="true">
            <div class="mb-4 flex items-center gap-3">
                <div class="h-10 w-10 animate-pulse rounded-full bg-slate-200 dark:bg-slate-700"></div>
                <div class="flex-1">
                    <SkeletonLine width="w-1/2"/>
                </div>
            </div>
            <SkeletonText lines=3/>
        </div>
    }
}
