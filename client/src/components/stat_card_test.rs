use super::*;

#[test]
fn stat_badge_success_tone_classes() {
    let badge = stat_badge(Some("success"));
    assert_eq!(badge.tone, "success");
    assert_eq!(badge.text, "On track");
    assert!(badge.class.contains("bg-emerald-100"));
    assert!(badge.class.contains("text-emerald-700"));
}

#[test]
fn stat_badge_unsupported_tone_falls_back_to_default() {
    let badge = stat_badge(Some("radioactive"));
    assert_eq!(badge, stat_badge(None));
    assert_eq!(badge.tone, "default");
    assert!(badge.class.contains("bg-slate-100"));
}

#[test]
fn stat_badge_every_tone_has_distinct_classes() {
    let tones = ["default", "success", "warning", "danger", "info"];
    let classes: Vec<String> = tones.iter().map(|t| stat_badge(Some(*t)).class).collect();
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[cfg(feature = "ssr")]
#[test]
fn stat_card_renders_label_value_and_success_badge() {
    let html = crate::testing::render_with_providers("/", || {
        view! { <StatCard label="Average Grade" value="A-" tone="success"/> }
    });
    assert!(html.contains("Average Grade"));
    assert!(html.contains("A-"));
    assert!(html.contains(&stat_badge(Some("success")).class));
}

#[cfg(feature = "ssr")]
#[test]
fn stat_card_unsupported_tone_renders_default_badge() {
    let html = crate::testing::render_with_providers("/", || {
        view! { <StatCard label="Average Grade" value="A-" tone="glitter"/> }
    });
    assert!(html.contains(&stat_badge(None).class));
    assert!(!html.contains("bg-emerald-100"));
}
