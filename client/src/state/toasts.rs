//! Toast value objects and the caller-side toast stack.
//!
//! DESIGN
//! ======
//! The `Toast` component only renders a value and forwards its close click.
//! Queueing, capacity and auto-dismiss belong to whoever shows toasts; in this
//! app that is `ToastStack`, held by `ToastContext` and drained by `ToastHost`.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

pub const DEFAULT_CAPACITY: usize = 4;
pub const DEFAULT_DISMISS_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [Self::Success, Self::Error, Self::Warning, Self::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Lenient parse: unknown kinds render as `Info` with a dev diagnostic.
    pub fn parse_or_default(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        if let Some(kind) = Self::ALL.into_iter().find(|k| k.as_str() == normalized) {
            return kind;
        }
        leptos::logging::debug_warn!("Toast: unsupported kind {value:?}, using \"info\"");
        Self::Info
    }
}

/// One notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Bounded FIFO of visible toasts. The oldest entry is dropped on overflow.
#[derive(Clone, Debug)]
pub struct ToastStack {
    next_id: u64,
    capacity: usize,
    entries: Vec<ToastEntry>,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ToastStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { next_id: 1, capacity: capacity.max(1), entries: Vec::new() }
    }

    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Notification channel handed to pages and forms through context.
#[derive(Clone, Copy, Debug)]
pub struct ToastContext {
    pub stack: RwSignal<ToastStack>,
    pub dismiss_after_ms: u64,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new(ToastStack::default(), DEFAULT_DISMISS_MS)
    }
}

impl ToastContext {
    pub fn new(stack: ToastStack, dismiss_after_ms: u64) -> Self {
        Self { stack: RwSignal::new(stack), dismiss_after_ms }
    }

    pub fn notify(&self, toast: Toast) -> u64 {
        let mut id = 0;
        self.stack.update(|stack| id = stack.push(toast));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }
}
