//! Reusable UI components.
//!
//! Most components are stateless: classes come from the variant tables in
//! `style`, interaction goes out through caller-supplied callbacks. `Modal`,
//! `ToastHost` and the form shells are the only ones holding local state.

pub mod alert;
pub mod assignment_row;
pub mod auth_panel;
pub mod button;
pub mod card;
pub mod course_card;
pub mod input;
pub mod loader;
pub mod login_form;
pub mod modal;
pub mod nav_bar;
pub mod register_form;
pub mod skeleton;
pub mod stat_card;
pub mod theme_toggle;
pub mod toast;
