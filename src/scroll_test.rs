#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn sample(offset: f64) -> ScrollSample {
    ScrollSample::new(offset, 3000.0, 1000.0)
}

// =============================================================
// Chrome
// =============================================================

#[test]
fn chrome_switches_strictly_above_threshold() {
    assert_eq!(nav_chrome(0.0, 100.0), NavChrome::AtTop);
    assert_eq!(nav_chrome(100.0, 100.0), NavChrome::AtTop);
    assert_eq!(nav_chrome(100.5, 100.0), NavChrome::Scrolled);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_hides_only_when_moving_down_past_threshold() {
    assert_eq!(nav_visibility(150.0, 190.0, 200.0), NavVisibility::Shown);
    assert_eq!(nav_visibility(190.0, 250.0, 200.0), NavVisibility::Hidden);
    assert_eq!(nav_visibility(250.0, 250.0, 200.0), NavVisibility::Shown);
    assert_eq!(nav_visibility(900.0, 800.0, 200.0), NavVisibility::Shown);
}

#[test]
fn scenario_offsets_drive_chrome_and_visibility() {
    let mut state = ScrollState::default();
    let thresholds = ScrollThresholds::default();
    let frames: Vec<ScrollFrame> = [0.0, 50.0, 150.0, 250.0, 180.0]
        .into_iter()
        .map(|offset| state.advance(sample(offset), thresholds))
        .collect();

    let chrome: Vec<NavChrome> = frames.iter().map(|f| f.chrome).collect();
    assert_eq!(
        chrome,
        vec![NavChrome::AtTop, NavChrome::AtTop, NavChrome::Scrolled, NavChrome::Scrolled, NavChrome::Scrolled]
    );

    let visibility: Vec<NavVisibility> = frames.iter().map(|f| f.visibility).collect();
    assert_eq!(
        visibility,
        vec![
            NavVisibility::Shown,
            NavVisibility::Shown,
            NavVisibility::Shown,
            NavVisibility::Hidden,
            NavVisibility::Shown,
        ]
    );
    assert_eq!(state.last_offset, 180.0);
}

#[test]
fn first_tick_deep_in_page_hides_nav() {
    let mut state = ScrollState::default();
    let frame = state.advance(sample(1200.0), ScrollThresholds::default());
    assert_eq!(frame.visibility, NavVisibility::Hidden);
}

#[test]
fn overscroll_offsets_clamp_to_zero() {
    let mut state = ScrollState::default();
    let frame = state.advance(sample(-40.0), ScrollThresholds::default());
    assert_eq!(frame.progress, 0.0);
    assert_eq!(state.last_offset, 0.0);
    assert_eq!(ScrollSample::at(f64::NAN).offset, 0.0);
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_is_fraction_of_scrollable_height() {
    assert_eq!(progress_ratio(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_ratio(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(progress_ratio(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn progress_clamps_past_the_end() {
    assert_eq!(progress_ratio(5000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn progress_is_zero_when_content_fits_viewport() {
    assert_eq!(progress_ratio(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(progress_ratio(50.0, 1000.0, 1000.0), 0.0);
    assert!(!progress_ratio(50.0, f64::NAN, 1000.0).is_nan());
}

proptest! {
    #[test]
    fn progress_is_monotone_and_bounded(
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0,
        doc in 0.0f64..8_000.0,
        viewport in 1.0f64..2_000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = progress_ratio(lo, doc, viewport);
        let p_hi = progress_ratio(hi, doc, viewport);
        prop_assert!((0.0..=1.0).contains(&p_lo));
        prop_assert!((0.0..=1.0).contains(&p_hi));
        prop_assert!(p_lo <= p_hi);
    }

    #[test]
    fn hidden_iff_last_two_samples_increase_past_threshold(
        offsets in prop::collection::vec(0.0f64..2_000.0, 2..30),
    ) {
        let mut state = ScrollState::default();
        let thresholds = ScrollThresholds::default();
        let mut last = None;
        for offset in &offsets {
            last = Some(state.advance(sample(*offset), thresholds));
        }
        let n = offsets.len();
        let expect_hidden = offsets[n - 1] > offsets[n - 2] && offsets[n - 1] > 200.0;
        let hidden = last.map(|f| f.visibility) == Some(NavVisibility::Hidden);
        prop_assert_eq!(hidden, expect_hidden);
    }
}
