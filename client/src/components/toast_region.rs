//! Live region rendering the toast queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once into its own container at page start. Screen readers hear
//! each new toast through the polite live region; the close button dismisses
//! a toast before its timer does.

#[cfg(test)]
#[path = "toast_region_test.rs"]
mod toast_region_test;

use folio::toast::{Toast, ToastKind, ToastQueue};
use leptos::prelude::*;

/// Decorative glyph shown before the message.
pub fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "!",
        ToastKind::Info => "i",
    }
}

/// Snapshot of the visible toasts, oldest first.
pub fn visible_toasts(queue: &ToastQueue) -> Vec<Toast> {
    queue.visible().cloned().collect()
}

#[component]
pub fn ToastRegion(queue: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || queue.with(visible_toasts)
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class_list()>
                            <span class="toast-icon" aria-hidden="true">{toast_icon(toast.kind)}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    queue.try_update(|q| q.dismiss(id));
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
