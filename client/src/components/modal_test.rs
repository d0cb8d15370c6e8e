use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Fake window: tracks live listeners and counts `on_close` calls.
#[derive(Clone, Default)]
struct FakeWindow {
    live: Rc<Cell<i32>>,
    closes: Rc<Cell<u32>>,
}

struct FakeHandle(Rc<Cell<i32>>);

impl ListenerHandle for FakeHandle {
    fn release(self) {
        self.0.set(self.0.get() - 1);
    }
}

impl FakeWindow {
    fn listen(&self) -> FakeHandle {
        self.live.set(self.live.get() + 1);
        FakeHandle(self.live.clone())
    }

    /// Dispatch a key the way the component does: only while a listener is live.
    fn press(&self, lifecycle: &mut ModalLifecycle<FakeHandle>, key: &str) {
        if self.live.get() > 0 && lifecycle.key_down(key) {
            self.closes.set(self.closes.get() + 1);
        }
    }
}

// =============================================================
// Listener acquisition
// =============================================================

#[test]
fn closed_modal_holds_no_listener() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();

    assert!(!lc.set_open(false, || window.listen()));
    assert_eq!(lc.state(), ModalState::Closed);
    assert_eq!(window.live.get(), 0);
}

#[test]
fn opening_acquires_exactly_one_listener() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();

    assert!(lc.set_open(true, || window.listen()));
    assert!(!lc.set_open(true, || window.listen()));
    assert_eq!(lc.state(), ModalState::Open);
    assert_eq!(window.live.get(), 1);
}

#[test]
fn closing_via_prop_releases_listener() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();

    lc.set_open(true, || window.listen());
    assert!(lc.set_open(false, || window.listen()));
    assert_eq!(lc.state(), ModalState::Closed);
    assert_eq!(window.live.get(), 0);
}

// =============================================================
// Escape handling
// =============================================================

#[test]
fn escape_while_open_closes_exactly_once() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();
    lc.set_open(true, || window.listen());

    window.press(&mut lc, "Escape");
    window.press(&mut lc, "Escape");

    assert_eq!(window.closes.get(), 1);
    assert_eq!(lc.state(), ModalState::Closed);
    assert_eq!(window.live.get(), 0);
}

#[test]
fn other_keys_are_ignored() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();
    lc.set_open(true, || window.listen());

    window.press(&mut lc, "Enter");
    window.press(&mut lc, "a");

    assert_eq!(window.closes.get(), 0);
    assert_eq!(lc.state(), ModalState::Open);
}

#[test]
fn prop_close_after_escape_is_noop() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();
    lc.set_open(true, || window.listen());
    window.press(&mut lc, "Esc");

    assert!(!lc.set_open(false, || window.listen()));
    assert_eq!(window.live.get(), 0);
}

#[test]
fn reopen_after_escape_acquires_fresh_listener() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();
    lc.set_open(true, || window.listen());
    window.press(&mut lc, "Escape");

    assert!(lc.set_open(true, || window.listen()));
    assert_eq!(window.live.get(), 1);
    window.press(&mut lc, "Escape");
    assert_eq!(window.closes.get(), 2);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_while_open_removes_listener_and_silences_events() {
    let window = FakeWindow::default();
    let mut lc = ModalLifecycle::default();
    lc.set_open(true, || window.listen());

    lc.teardown();
    window.press(&mut lc, "Escape");

    assert_eq!(window.live.get(), 0);
    assert_eq!(window.closes.get(), 0);
}

#[test]
fn dropping_lifecycle_while_open_releases_listener() {
    let window = FakeWindow::default();
    {
        let mut lc = ModalLifecycle::default();
        lc.set_open(true, || window.listen());
        assert_eq!(window.live.get(), 1);
    }
    assert_eq!(window.live.get(), 0);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn is_escape_accepts_legacy_key_name() {
    assert!(is_escape("Escape"));
    assert!(is_escape("Esc"));
    assert!(!is_escape("Enter"));
}

#[test]
fn modal_title_id_slugifies() {
    assert_eq!(modal_title_id("Essay: Week 3!"), "modal-essay-week-3-title");
    assert_eq!(modal_title_id("  "), "modal-title");
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn modal_closed_renders_no_dialog() {
    let html = crate::testing::render_with_providers("/", || {
        view! {
            <Modal open=false on_close=Callback::new(|()| {}) title="Details">
                <p>"Body"</p>
            </Modal>
        }
    });
    assert!(!html.contains("role=\"dialog\""));
    assert!(!html.contains("Body"));
}

#[cfg(feature = "ssr")]
#[test]
fn modal_open_renders_dialog_with_title() {
    let html = crate::testing::render_with_providers("/", || {
        view! {
            <Modal open=true on_close=Callback::new(|()| {}) title="Details">
                <p>"Body"</p>
            </Modal>
        }
    });
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Details"));
    assert!(html.contains("Body"));
}
