use super::*;
use crate::testing::mock::{mock_assignments, mock_user, mock_user_with};

// =============================================================
// greeting
// =============================================================

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(&mock_user()), "Welcome back, Jordan");
}

#[test]
fn greeting_falls_back_when_name_is_blank() {
    let user = mock_user_with(|u| u.name = "   ".to_owned());
    assert_eq!(greeting(&user), "Welcome back, there");
}

// =============================================================
// upcoming
// =============================================================

#[test]
fn upcoming_drops_submitted_and_puts_overdue_first() {
    let list = upcoming(mock_assignments(6));
    let statuses: Vec<_> = list.iter().map(|a| a.status.as_str()).collect();
    assert_eq!(statuses, ["overdue", "overdue", "pending", "pending"]);
}

#[test]
fn upcoming_keeps_order_within_status() {
    let list = upcoming(mock_assignments(6));
    let ids: Vec<_> = list.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["assignment-3", "assignment-6", "assignment-2", "assignment-5"]);
}

#[test]
fn upcoming_treats_unknown_status_as_pending() {
    let mut list = mock_assignments(1);
    list[0].status = "draft".to_owned();
    assert_eq!(upcoming(list).len(), 1);
}
