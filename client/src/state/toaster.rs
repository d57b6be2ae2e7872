//! Toast queue handle shared by the hosts.
//!
//! DESIGN
//! ======
//! The queue lives in a `RwSignal` read by the `ToastRegion` component. Each
//! toast gets a dismiss timer owned here; timers hold only weak references,
//! and every write goes through `try_update`, so a timer firing after the
//! region was disposed is a no-op.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use folio::toast::{ToastId, ToastKind, ToastQueue};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashMap;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
type Timers = RefCell<HashMap<ToastId, Timeout>>;

#[derive(Clone)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    #[cfg(feature = "hydrate")]
    timers: Rc<Timers>,
}

impl Toaster {
    pub fn new(queue: ToastQueue) -> Self {
        Self {
            queue: RwSignal::new(queue),
            #[cfg(feature = "hydrate")]
            timers: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    /// Show a toast. `None` once the queue has been disposed.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Option<ToastId> {
        let message = message.into();
        let now = now_ms();
        let pushed = self.queue.try_update(|q| q.push(kind, message, now))?;

        #[cfg(feature = "hydrate")]
        {
            let mut timers = self.timers.borrow_mut();
            for id in &pushed.evicted {
                timers.remove(id);
            }
            let duration = self.queue.with_untracked(ToastQueue::duration_ms);
            let queue = self.queue;
            let weak: Weak<Timers> = Rc::downgrade(&self.timers);
            let id = pushed.id;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let timer = Timeout::new(duration.ceil() as u32, move || {
                expire_toast(queue, id);
                if let Some(timers) = weak.upgrade() {
                    timers.borrow_mut().remove(&id);
                }
            });
            timers.insert(id, timer);
        }

        Some(pushed.id)
    }

    /// Dismiss one toast early (close button). Idempotent.
    pub fn dismiss(&self, id: ToastId) {
        self.queue.try_update(|q| q.dismiss(id));
        #[cfg(feature = "hydrate")]
        self.timers.borrow_mut().remove(&id);
    }

    /// Drop every toast and cancel every pending timer.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        self.timers.borrow_mut().clear();
        self.queue.try_update(ToastQueue::clear);
    }

    pub fn len(&self) -> usize {
        self.queue.try_with_untracked(ToastQueue::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Remove the toast whose dismiss timer fired. Matches by id; the wall clock
/// is not consulted. False when it was already gone.
pub fn expire_toast(queue: RwSignal<ToastQueue>, id: ToastId) -> bool {
    queue.try_update(|q| q.dismiss(id)).unwrap_or(false)
}
