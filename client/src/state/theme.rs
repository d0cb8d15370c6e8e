//! Light/dark theme context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `ThemeContext`; components read it with
//! `expect_context::<ThemeContext>()`. Browser persistence lives in
//! `util::dark_mode` so this module stays testable off the browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored theme name. `"true"`/`"false"` are accepted as dark/light.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "false" => Some(Self::Light),
            "dark" | "true" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Shared `{ theme, toggle_theme }` handle.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self { theme: RwSignal::new(initial) }
    }

    /// Seed from the stored browser preference (always light during SSR).
    pub fn from_preference() -> Self {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        Self::new(theme)
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle_theme(&self) -> Theme {
        let current = self.theme.get_untracked();
        let next = dark_mode::toggle(current);
        self.theme.set(next);
        next
    }
}
