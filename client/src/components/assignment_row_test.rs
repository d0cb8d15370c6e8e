use super::*;

// =============================================================
// AssignmentStatus
// =============================================================

#[test]
fn status_parse_known_values() {
    assert_eq!(AssignmentStatus::parse_or_default("submitted"), AssignmentStatus::Submitted);
    assert_eq!(AssignmentStatus::parse_or_default("Overdue"), AssignmentStatus::Overdue);
    assert_eq!(AssignmentStatus::parse_or_default(" pending "), AssignmentStatus::Pending);
}

#[test]
fn status_overdue_label() {
    assert_eq!(AssignmentStatus::parse_or_default("overdue").label(), "Overdue");
}

#[test]
fn status_unknown_falls_back_to_pending_presentation() {
    let status = AssignmentStatus::parse_or_default("graded");
    assert_eq!(status, AssignmentStatus::Pending);
    assert_eq!(status.label(), "Pending");
    assert_eq!(status.badge_class(), AssignmentStatus::Pending.badge_class());
}

#[test]
fn status_badge_classes_follow_table() {
    assert!(AssignmentStatus::Overdue.badge_class().contains("bg-red-100"));
    assert!(AssignmentStatus::Submitted.badge_class().contains("bg-emerald-100"));
    assert!(AssignmentStatus::Pending.badge_class().contains("bg-amber-100"));
}

#[test]
fn status_action_labels() {
    assert_eq!(AssignmentStatus::Submitted.action_label(), "View");
    assert_eq!(AssignmentStatus::Overdue.action_label(), "Submit late");
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn assignment_row_renders_overdue_badge() {
    use crate::testing::mock::mock_assignment_with;

    let assignment = mock_assignment_with(|a| a.status = "overdue".to_owned());
    let html = crate::testing::render_with_providers("/assignments", move || {
        view! { <AssignmentRow assignment=assignment/> }
    });
    assert!(html.contains("Overdue"));
    assert!(html.contains("bg-red-100"));
}

#[cfg(feature = "ssr")]
#[test]
fn assignment_row_unknown_status_renders_pending() {
    use crate::testing::mock::mock_assignment_with;

    let assignment = mock_assignment_with(|a| a.status = "archived".to_owned());
    let html = crate::testing::render_with_providers("/assignments", move || {
        view! { <AssignmentRow assignment=assignment/> }
    });
    assert!(html.contains("Pending"));
    assert!(!html.contains("bg-red-100"));
    assert!(html.contains("bg-amber-100"));
}
