//! Button with variant/size styling and an optional loading state.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::style::{join_classes, resolve, tables};

/// Class string for a button. Unknown variants or sizes use the defaults.
pub fn button_class(variant: Option<&str>, size: Option<&str>, full_width: bool, extra: &str) -> String {
    let mut selection = Vec::with_capacity(2);
    if let Some(variant) = variant {
        selection.push(("variant", variant));
    }
    if let Some(size) = size {
        selection.push(("size", size));
    }
    let overrides = join_classes([if full_width { "w-full" } else { "" }, extra]);
    resolve(&tables::BUTTON, &selection, &overrides)
}

#[component]
pub fn Button(
    #[prop(optional, into)] variant: Option<String>,
    #[prop(optional, into)] size: Option<String>,
    /// `button` (default), `submit` or `reset`.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant.as_deref(), size.as_deref(), full_width, &class);
    let is_loading = move || loading.get().unwrap_or(false);

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            aria-busy=move || is_loading().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
        >
            <Show when=is_loading>
                <Loader size="xs"/>
            </Show>
            {children()}
        </button>
    }
}
