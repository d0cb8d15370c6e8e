//! Route-level page shells.
//!
//! Pages compose components over the static sample content in `catalog` and
//! never fetch data.

pub mod assignments;
pub mod catalog;
pub mod courses;
pub mod dashboard;
pub mod login;
pub mod not_found;
