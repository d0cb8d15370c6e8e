//! Spinner in five sizes (`xs`, `sm`, `md`, `lg`, `xl`) plus a full-area variant.

use leptos::prelude::*;

use crate::style::{resolve, tables};

pub const DEFAULT_LABEL: &str = "Loading…";

pub fn loader_class(size: Option<&str>) -> String {
    let selection: Vec<_> = size.map(|size| ("size", size)).into_iter().collect();
    resolve(&tables::LOADER, &selection, "")
}

#[component]
pub fn Loader(#[prop(optional, into)] size: Option<String>, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let class = loader_class(size.as_deref());
    let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_owned());

    view! {
        <span role="status" class="inline-flex items-center">
            <span class=class aria-hidden="true"></span>
            <span class="sr-only">{label}</span>
        </span>
    }
}

/// Centered spinner with a visible caption, for whole sections.
#[component]
pub fn PageLoader(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_owned());

    view! {
        <div class="flex min-h-[12rem] flex-col items-center justify-center gap-3 text-slate-500">
            <span class=loader_class(Some("lg")) aria-hidden="true"></span>
            <p class="text-sm">{label}</p>
        </div>
    }
}
