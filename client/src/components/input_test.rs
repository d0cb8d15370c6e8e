use super::*;

#[test]
fn input_class_default_state() {
    let class = input_class(None, false, "");
    assert!(class.contains("border-slate-300"));
    assert!(class.contains("h-10"));
}

#[test]
fn input_class_error_state_swaps_border_color() {
    let class = input_class(Some("lg"), true, "");
    assert!(class.contains("border-red-500"));
    assert!(!class.contains("border-slate-300"));
    assert!(class.contains("h-12"));
}

#[test]
fn field_ids_slugify_name() {
    assert_eq!(
        field_ids("Confirm Password"),
        ("field-confirm-password".to_owned(), "field-confirm-password-error".to_owned())
    );
}
