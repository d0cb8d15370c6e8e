use super::*;
use crate::style::tables;

fn tokens(class: &str) -> Vec<&str> {
    class.split_whitespace().collect()
}

fn all_tables() -> [&'static VariantSpec; 8] {
    [
        &tables::BUTTON,
        &tables::CARD,
        &tables::INPUT,
        &tables::ALERT,
        &tables::STAT_BADGE,
        &tables::STATUS_BADGE,
        &tables::LOADER,
        &tables::TOAST,
    ]
}

// =============================================================
// Table sanity
// =============================================================

#[test]
fn every_dimension_declares_its_default() {
    for spec in all_tables() {
        for dimension in spec.dimensions {
            assert!(
                dimension.fragment(dimension.default).is_some(),
                "{}.{} default {:?} missing",
                spec.component,
                dimension.name,
                dimension.default
            );
        }
    }
}

#[test]
fn loader_declares_all_sizes() {
    let sizes: Vec<_> = tables::LOADER.dimension("size").unwrap().option_names().collect();
    assert_eq!(sizes, vec!["xs", "sm", "md", "lg", "xl"]);
}

// =============================================================
// Supported selections
// =============================================================

#[test]
fn button_every_variant_size_pair_contains_exact_fragments() {
    let variant_dim = tables::BUTTON.dimension("variant").unwrap();
    let size_dim = tables::BUTTON.dimension("size").unwrap();

    for &(variant, variant_fragment) in variant_dim.options {
        for &(size, size_fragment) in size_dim.options {
            let class = resolve(&tables::BUTTON, &[("variant", variant), ("size", size)], "");
            let got = tokens(&class);

            let mut expected: Vec<&str> = tokens(tables::BUTTON.base);
            expected.extend(tokens(variant_fragment));
            expected.extend(tokens(size_fragment));

            for token in &expected {
                assert!(got.contains(token), "{variant}/{size}: missing {token} in {class}");
            }
            assert_eq!(got.len(), expected.len(), "{variant}/{size}: unexpected tokens in {class}");

            for &(other, other_fragment) in variant_dim.options {
                if other == variant {
                    continue;
                }
                for token in tokens(other_fragment) {
                    if !tokens(variant_fragment).contains(&token) {
                        assert!(!got.contains(&token), "{variant}/{size}: leaked {token} from {other}");
                    }
                }
            }
        }
    }
}

#[test]
fn missing_dimensions_use_defaults() {
    let report = resolve_report(&tables::BUTTON, &[], "");
    assert_eq!(report.chosen, vec![("variant", "primary"), ("size", "md")]);
    assert!(report.fallbacks.is_empty());
    assert!(report.class.contains("bg-indigo-600"));
    assert!(report.class.contains("h-10"));
}

#[test]
fn partial_selection_fills_remaining_defaults() {
    let report = resolve_report(&tables::BUTTON, &[("size", "lg")], "");
    assert_eq!(report.chosen, vec![("variant", "primary"), ("size", "lg")]);
    assert!(report.class.contains("h-12"));
    assert!(!report.class.contains("h-10"));
}

#[test]
fn last_entry_for_a_dimension_wins() {
    let report = resolve_report(&tables::BUTTON, &[("variant", "danger"), ("variant", "ghost")], "");
    assert_eq!(report.chosen[0], ("variant", "ghost"));
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_replace_conflicting_tokens() {
    let class = resolve(&tables::BUTTON, &[("variant", "primary"), ("size", "md")], "bg-emerald-600 px-8");
    let got = tokens(&class);
    assert!(got.contains(&"bg-emerald-600"));
    assert!(got.contains(&"px-8"));
    assert!(!got.contains(&"bg-indigo-600"));
    assert!(!got.contains(&"px-4"));
    // Scoped tokens are a different conflict group.
    assert!(got.contains(&"hover:bg-indigo-700"));
}

#[test]
fn overrides_without_conflicts_are_appended() {
    let class = resolve(&tables::CARD, &[], "col-span-2");
    assert!(class.ends_with("col-span-2"));
}

#[test]
fn size_fragment_overrides_base_border_width() {
    let class = resolve(&tables::LOADER, &[("size", "xl")], "");
    let got = tokens(&class);
    assert!(got.contains(&"border-4"));
    assert!(!got.contains(&"border-2"));
    assert!(got.contains(&"border-t-transparent"));
}

#[test]
fn input_error_state_replaces_text_color() {
    let class = resolve(&tables::INPUT, &[("state", "error")], "");
    let got = tokens(&class);
    assert!(got.contains(&"text-red-900"));
    assert!(!got.contains(&"text-slate-900"));
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn unknown_option_falls_back_to_default_fragment() {
    let report = resolve_report(&tables::BUTTON, &[("variant", "sparkly"), ("size", "huge")], "");
    let default = resolve_report(&tables::BUTTON, &[], "");
    assert_eq!(report.class, default.class);
    assert_eq!(
        report.fallbacks,
        vec![
            Fallback::UnknownOption { dimension: "variant", requested: "sparkly".to_owned(), used: "primary" },
            Fallback::UnknownOption { dimension: "size", requested: "huge".to_owned(), used: "md" },
        ]
    );
}

#[test]
fn unknown_option_for_every_table_never_panics() {
    for spec in all_tables() {
        let selection: Vec<(&str, &str)> = spec.dimensions.iter().map(|d| (d.name, "does-not-exist")).collect();
        let report = resolve_report(spec, &selection, "");
        assert_eq!(report.fallbacks.len(), spec.dimensions.len());
        assert_eq!(report.class, resolve(spec, &[], ""));
    }
}

#[test]
fn blank_option_is_treated_as_absent() {
    let report = resolve_report(&tables::ALERT, &[("tone", "  ")], "");
    assert!(report.fallbacks.is_empty());
    assert_eq!(report.chosen, vec![("tone", "info")]);
}

#[test]
fn unknown_dimension_is_ignored_and_reported_once() {
    let report = resolve_report(&tables::ALERT, &[("shape", "round"), ("shape", "square")], "");
    assert_eq!(report.fallbacks, vec![Fallback::UnknownDimension { dimension: "shape".to_owned() }]);
    assert_eq!(report.class, resolve(&tables::ALERT, &[], ""));
}

#[test]
fn resolution_option_reports_applied_choice() {
    let report = resolve_reported(&tables::STAT_BADGE, &[("tone", "neon")], "");
    assert_eq!(report.option("tone"), Some("default"));
    assert_eq!(report.option("size"), None);
}
