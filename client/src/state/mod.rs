//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only two pieces of state cross component boundaries: the theme and the
//! toast stack. Both are explicit context objects provided by `App` (and by
//! the test harness) rather than module-level globals. Everything else is
//! local component state or plain records passed down as props.

pub mod records;
pub mod theme;
pub mod toasts;
