use super::*;

#[test]
fn button_class_defaults_to_primary_medium() {
    let class = button_class(None, None, false, "");
    assert!(class.contains("bg-indigo-600"));
    assert!(class.contains("h-10"));
    assert!(!class.contains("w-full"));
}

#[test]
fn button_class_applies_variant_and_size() {
    let class = button_class(Some("danger"), Some("sm"), false, "");
    assert!(class.contains("bg-red-600"));
    assert!(class.contains("h-8"));
    assert!(!class.contains("bg-indigo-600"));
}

#[test]
fn button_class_full_width_and_extra_merge_last() {
    let class = button_class(Some("outline"), None, true, "h-14");
    assert!(class.contains("w-full"));
    assert!(class.contains("h-14"));
    assert!(!class.contains("h-10"));
}

#[test]
fn button_class_unknown_variant_falls_back() {
    assert_eq!(button_class(Some("neon"), Some("giant"), false, ""), button_class(None, None, false, ""));
}

#[cfg(feature = "ssr")]
#[test]
fn button_renders_children_and_type() {
    let html = crate::testing::render_with_providers("/", || {
        view! { <Button variant="secondary" button_type="submit">"Save draft"</Button> }
    });
    assert!(html.contains("Save draft"));
    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("bg-slate-100"));
}
