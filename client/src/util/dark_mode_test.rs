#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_off_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_returns_the_other_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_and_persist_are_noops_off_browser() {
    apply(Theme::Dark);
    persist(Theme::Dark);
    assert_eq!(read_preference(), Theme::Light);
}
