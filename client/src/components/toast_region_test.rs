use folio::toast::ToastQueue;

use super::*;

#[test]
fn icons_differ_per_kind() {
    assert_eq!(toast_icon(ToastKind::Success), "✓");
    assert_ne!(toast_icon(ToastKind::Error), toast_icon(ToastKind::Info));
}

#[test]
fn visible_toasts_are_oldest_first() {
    let mut queue = ToastQueue::new(3, 1000.0);
    queue.push(ToastKind::Info, "first", 0.0);
    queue.push(ToastKind::Success, "second", 10.0);
    let messages = visible_toasts(&queue).into_iter().map(|t| t.message).collect::<Vec<_>>();
    assert_eq!(messages, vec!["first", "second"]);
}
