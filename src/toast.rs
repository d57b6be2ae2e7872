//! Toast notification queue.
//!
//! Toasts are visible immediately, dismissed by the user or by their
//! deadline, and capped at `max_visible`: pushing past the cap evicts the
//! oldest. The host owns the per-toast timers and calls [`ToastQueue::expire`]
//! or [`ToastQueue::dismiss`]; both are safe to call for ids already gone.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;

use crate::consts::{TOAST_DURATION_MS, TOAST_MAX_VISIBLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Class list for the toast element.
    #[must_use]
    pub fn class_list(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub dismiss_at_ms: f64,
}

/// Result of [`ToastQueue::push`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pushed {
    pub id: ToastId,
    /// Older toasts removed to stay under the cap.
    pub evicted: Vec<ToastId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    max_visible: usize,
    duration_ms: f64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_MAX_VISIBLE, f64::from(TOAST_DURATION_MS))
    }
}

impl ToastQueue {
    /// A `max_visible` of 0 is treated as 1.
    #[must_use]
    pub fn new(max_visible: usize, duration_ms: f64) -> Self {
        Self { toasts: VecDeque::new(), next_id: 1, max_visible: max_visible.max(1), duration_ms: duration_ms.max(0.0) }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: f64) -> Pushed {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_back(Toast { id, kind, message: message.into(), dismiss_at_ms: now_ms + self.duration_ms });

        let mut evicted = Vec::new();
        while self.toasts.len() > self.max_visible {
            if let Some(old) = self.toasts.pop_front() {
                evicted.push(old.id);
            }
        }
        Pushed { id, evicted }
    }

    /// Remove one toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Remove every toast whose deadline has passed.
    pub fn expire(&mut self, now_ms: f64) -> Vec<ToastId> {
        let expired = self.toasts.iter().filter(|t| t.dismiss_at_ms <= now_ms).map(|t| t.id).collect::<Vec<_>>();
        self.toasts.retain(|t| t.dismiss_at_ms > now_ms);
        expired
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}
