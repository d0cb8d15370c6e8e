//! Labelled text input with an optional inline error message.
//!
//! The input is controlled: the caller owns the value signal and receives every
//! edit through `on_input`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

use crate::style::{resolve, tables};

pub fn input_class(size: Option<&str>, has_error: bool, extra: &str) -> String {
    let state = if has_error { "error" } else { "default" };
    let mut selection = vec![("state", state)];
    if let Some(size) = size {
        selection.push(("size", size));
    }
    resolve(&tables::INPUT, &selection, extra)
}

/// DOM ids for the input element and its error message.
pub fn field_ids(name: &str) -> (String, String) {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    (format!("field-{slug}"), format!("field-{slug}-error"))
}

#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] size: Option<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let (input_id, error_id) = field_ids(&name);
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let class = move || input_class(size.as_deref(), has_error(), "");
    let described_by = {
        let error_id = error_id.clone();
        move || has_error().then(|| error_id.clone())
    };

    view! {
        <div class="space-y-1">
            <label for=input_id.clone() class="block text-sm font-medium text-slate-700 dark:text-slate-300">
                {label}
            </label>
            <input
                id=input_id
                name=name
                type=input_type
                class=class
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                aria-invalid=move || has_error().to_string()
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .filter(|message| !message.is_empty())
                    .map(|message| {
                        view! {
                            <p id=error_id.clone() class="text-sm text-red-600">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
