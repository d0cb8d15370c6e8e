//! Style composition: class merging and declarative variant tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never branch on variant names to build class strings. They pick
//! a table from `tables` and hand the caller's selection to `variant::resolve`.

pub mod merge;
pub mod tables;
pub mod variant;

pub use merge::{join_classes, merge_classes};
pub use variant::{Dimension, Fallback, Resolution, VariantSpec, resolve, resolve_report, resolve_reported};
