//! Dashboard tile showing one labelled metric and a tone badge.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

use crate::components::card::Card;
use crate::style::{resolve_reported, tables};

/// Badge presentation for a stat tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatBadge {
    pub class: String,
    pub tone: &'static str,
    pub text: &'static str,
}

pub fn stat_badge(tone: Option<&str>) -> StatBadge {
    let selection: Vec<_> = tone.map(|tone| ("tone", tone)).into_iter().collect();
    let resolution = resolve_reported(&tables::STAT_BADGE, &selection, "");
    let tone = resolution.option("tone").unwrap_or("default");
    StatBadge { class: resolution.class, tone, text: badge_text(tone) }
}

fn badge_text(tone: &str) -> &'static str {
    match tone {
        "success" => "On track",
        "warning" => "At risk",
        "danger" => "Behind",
        "info" => "Update",
        _ => "Steady",
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] tone: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    let badge = stat_badge(tone.as_deref());

    view! {
        <Card class="flex flex-col gap-2">
            <p class="text-sm font-medium text-slate-500 dark:text-slate-400">{label}</p>
            <div class="flex items-baseline justify-between gap-3">
                <span class="text-2xl font-bold text-slate-900 dark:text-slate-100">{value}</span>
                <span class=badge.class data-tone=badge.tone>{badge.text}</span>
            </div>
            {hint.map(|hint| view! { <p class="text-xs text-slate-500">{hint}</p> })}
        </Card>
    }
}
