//! Theme preference persistence.
//!
//! The active `Theme` is stored by name in `localStorage` and mirrored onto
//! `<html>` as `data-theme` plus a `dark` class so `dark:` utilities apply.
//! Without a stored value the `prefers-color-scheme` media query decides.
//! Off the browser (SSR, native tests) every call is a no-op and the theme
//! is light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "campus_theme";

/// Stored theme, else the system preference, else light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|value| Theme::parse(&value));
        if let Some(theme) = stored {
            return theme;
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Theme::from_dark(prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let _ = el.set_attribute("data-theme", theme.as_str());
        let class_list = el.class_list();
        let _ = if theme.is_dark() { class_list.add_1("dark") } else { class_list.remove_1("dark") };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Store `theme` for the next visit.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some_and(|storage| storage.set_item(STORAGE_KEY, theme.as_str()).is_ok());
        if !stored {
            leptos::logging::warn!("theme preference not persisted");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
