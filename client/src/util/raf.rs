//! One-shot `requestAnimationFrame` handle.
//!
//! Dropping an unfired [`AnimationFrame`] cancels it. Replacing a stored
//! handle therefore cancels the older request.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// Schedule `callback` for the next frame. `None` without a window or
    /// if the browser refused the request.
    pub fn request(callback: impl FnOnce(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            if let Some(callback) = callback.take() {
                callback(ts);
            }
        }) as Box<dyn FnMut(f64)>);
        let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) else {
            return None;
        };
        Some(Self { id, _callback: closure })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}
