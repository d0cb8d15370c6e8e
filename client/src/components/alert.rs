//! Inline banner for page-level status messages.

use leptos::prelude::*;

use crate::style::{resolve_reported, tables};

/// Resolved presentation for one alert tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertStyle {
    pub class: String,
    pub tone: &'static str,
    pub icon: &'static str,
    /// `alert` for tones that need immediate attention, `status` otherwise.
    pub role: &'static str,
}

pub fn alert_style(tone: Option<&str>) -> AlertStyle {
    let selection: Vec<_> = tone.map(|tone| ("tone", tone)).into_iter().collect();
    let resolution = resolve_reported(&tables::ALERT, &selection, "");
    let tone = resolution.option("tone").unwrap_or("info");
    let (icon, role) = match tone {
        "success" => ("✓", "status"),
        "warning" => ("⚠", "alert"),
        "error" => ("✕", "alert"),
        _ => ("ℹ", "status"),
    };
    AlertStyle { class: resolution.class, tone, icon, role }
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional, into)] tone: Option<String>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let style = alert_style(tone.as_deref());

    view! {
        <div class=style.class role=style.role data-tone=style.tone>
            <span class="shrink-0 font-bold" aria-hidden="true">{style.icon}</span>
            <div>
                {title.map(|title| view! { <p class="font-semibold">{title}</p> })}
                <p>{message}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_style_defaults_to_info() {
        let style = alert_style(None);
        assert_eq!(style.tone, "info");
        assert_eq!(style.role, "status");
        assert!(style.class.contains("bg-sky-50"));
    }

    #[test]
    fn alert_style_error_is_assertive() {
        let style = alert_style(Some("error"));
        assert_eq!(style.role, "alert");
        assert_eq!(style.icon, "✕");
        assert!(style.class.contains("bg-red-50"));
    }

    #[test]
    fn alert_style_unknown_tone_uses_info() {
        assert_eq!(alert_style(Some("critical")), alert_style(None));
    }
}
