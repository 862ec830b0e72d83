use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Trailing-edge debounce: a pending timeout handle that each `schedule`
/// cancels and replaces, so only the last call in a burst fires.
pub struct Debouncer {
    delay_ms: i32,
    pending: Cell<Option<i32>>,
}

impl Debouncer {
    pub const fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: Cell::new(None),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        if let Some(id) = set_timeout(self.delay_ms, f) {
            self.pending.set(Some(id));
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

/// One-shot timeout, used for self-dismissing toasts.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    set_timeout(delay_ms, f);
}

fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        )
        .ok()
}
