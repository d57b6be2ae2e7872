#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_first_push_arms_deadline() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 16.0);
    assert_eq!(c.push(10, 100.0), Some(116.0));
    assert!(c.is_pending());
    assert_eq!(c.deadline(), Some(116.0));
}

#[test]
fn throttle_later_pushes_keep_deadline_and_replace_value() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 16.0);
    c.push(10, 100.0);
    assert_eq!(c.push(20, 105.0), None);
    assert_eq!(c.push(30, 110.0), None);
    assert_eq!(c.deadline(), Some(116.0));
    assert_eq!(c.peek(), Some(&30));
}

#[test]
fn throttle_applies_last_value_at_deadline() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 16.0);
    c.push(10, 100.0);
    c.push(20, 105.0);
    assert_eq!(c.take_due(110.0), None);
    assert_eq!(c.take_due(116.0), Some(20));
    assert!(!c.is_pending());
    assert_eq!(c.deadline(), None);
}

#[test]
fn throttle_rearms_after_apply() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 16.0);
    c.push(1, 0.0);
    c.take_due(16.0);
    assert_eq!(c.push(2, 20.0), Some(36.0));
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn debounce_every_push_moves_deadline() {
    let mut c = Coalescer::new(CoalesceMode::Debounce, 100.0);
    assert_eq!(c.push(1, 0.0), Some(100.0));
    assert_eq!(c.push(2, 50.0), Some(150.0));
    assert_eq!(c.take_due(100.0), None);
    assert_eq!(c.take_due(150.0), Some(2));
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn zero_window_is_due_immediately() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 0.0);
    assert_eq!(c.push(5, 42.0), Some(42.0));
    assert_eq!(c.take_due(42.0), Some(5));
}

#[test]
fn negative_and_nan_windows_clamp_to_zero() {
    assert_eq!(Coalescer::<u8>::new(CoalesceMode::Throttle, -5.0).window_ms(), 0.0);
    assert_eq!(Coalescer::<u8>::new(CoalesceMode::Debounce, f64::NAN).window_ms(), 0.0);
}

#[test]
fn cancel_drops_pending_value() {
    let mut c = Coalescer::new(CoalesceMode::Throttle, 16.0);
    c.push(1, 0.0);
    c.cancel();
    assert!(!c.is_pending());
    assert_eq!(c.take_due(1000.0), None);
}

#[test]
fn flush_ignores_deadline() {
    let mut c = Coalescer::new(CoalesceMode::Debounce, 100.0);
    c.push(7, 0.0);
    assert_eq!(c.flush(), Some(7));
    assert_eq!(c.flush(), None);
}

// =============================================================
// Properties
// =============================================================

proptest! {
    #[test]
    fn burst_always_applies_its_last_value(
        values in prop::collection::vec(0u32..10_000, 1..40),
        gaps in prop::collection::vec(0.0f64..10.0, 40),
        debounce in any::<bool>(),
    ) {
        let mode = if debounce { CoalesceMode::Debounce } else { CoalesceMode::Throttle };
        let mut c = Coalescer::new(mode, 100.0);
        let mut now = 0.0;
        for (value, gap) in values.iter().zip(&gaps) {
            now += gap;
            c.push(*value, now);
        }
        let deadline = c.deadline().unwrap_or(now);
        prop_assert_eq!(c.take_due(deadline), values.last().copied());
        prop_assert!(!c.is_pending());
    }

    #[test]
    fn throttle_never_applies_twice_inside_one_window(
        gaps in prop::collection::vec(0.0f64..30.0, 1..80),
    ) {
        let window = 16.0;
        let mut c = Coalescer::new(CoalesceMode::Throttle, window);
        let mut now = 0.0;
        let mut applied_at: Vec<f64> = Vec::new();
        for gap in gaps {
            now += gap;
            if c.take_due(now).is_some() {
                applied_at.push(now);
            }
            c.push(now, now);
        }
        for pair in applied_at.windows(2) {
            prop_assert!(pair[1] - pair[0] >= window - 1e-9);
        }
    }
}
