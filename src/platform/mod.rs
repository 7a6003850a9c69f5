//! Platform abstraction layer
//!
//! Browser timer handles. An [`Interval`] clears its `setInterval` when
//! dropped, so cancel-then-recreate can never leave two competing timers
//! running.

use wasm_bindgen::prelude::*;

/// RAII handle for a browser `setInterval`
pub struct Interval {
    id: i32,
    // Kept alive for as long as the browser may invoke it
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `callback` to fire every `period_ms` milliseconds until the
    /// returned handle is dropped.
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
