//! Surface container used by dashboards, stat tiles and course listings.

use leptos::prelude::*;

use crate::style::{resolve, tables};

pub fn card_class(variant: Option<&str>, padding: Option<&str>, extra: &str) -> String {
    let mut selection = Vec::with_capacity(2);
    if let Some(variant) = variant {
        selection.push(("variant", variant));
    }
    if let Some(padding) = padding {
        selection.push(("padding", padding));
    }
    resolve(&tables::CARD, &selection, extra)
}

#[component]
pub fn Card(
    #[prop(optional, into)] variant: Option<String>,
    #[prop(optional, into)] padding: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = card_class(variant.as_deref(), padding.as_deref(), &class);

    view! {
        <section class=class>
            {title.map(|title| view! { <h3 class="mb-3 text-lg font-semibold text-slate-900 dark:text-slate-100">{title}</h3> })}
            {children()}
        </section>
    }
}
