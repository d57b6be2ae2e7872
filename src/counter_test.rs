#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn spec(target: u64) -> CounterSpec {
    CounterSpec { target, suffix: "+".to_owned() }
}

// =============================================================
// CounterSpec
// =============================================================

#[test]
fn parse_accepts_plain_and_grouped_integers() {
    assert_eq!(CounterSpec::parse("150", Some("+")), Ok(spec(150)));
    assert_eq!(CounterSpec::parse(" 1,200 ", None).map(|s| s.target), Ok(1200));
    assert_eq!(CounterSpec::parse("1_000", None).map(|s| s.suffix), Ok(String::new()));
}

#[test]
fn parse_rejects_empty_negative_and_fractional() {
    assert_eq!(CounterSpec::parse("  ", None), Err(CounterSpecError::Empty));
    assert!(matches!(CounterSpec::parse("-5", None), Err(CounterSpecError::NotAnInteger(_))));
    assert!(matches!(CounterSpec::parse("9.5", None), Err(CounterSpecError::NotAnInteger(_))));
    assert!(matches!(CounterSpec::parse("lots", None), Err(CounterSpecError::NotAnInteger(_))));
}

#[test]
fn parse_accepts_separators_only_between_thousands_groups() {
    assert_eq!(CounterSpec::parse("1,234,567", None).map(|s| s.target), Ok(1_234_567));
    assert_eq!(CounterSpec::parse("12_000", None).map(|s| s.target), Ok(12_000));
    for raw in ["1,2,3", "1,20", "1234,567", ",100", "100,", "1,,000", "1,000_000"] {
        assert!(
            matches!(CounterSpec::parse(raw, None), Err(CounterSpecError::NotAnInteger(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn text_appends_suffix() {
    assert_eq!(spec(42).text(42), "42+");
}

// =============================================================
// Easing
// =============================================================

#[test]
fn ease_out_quad_endpoints_and_midpoint() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(0.5), 0.75);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert_eq!(ease_out_quad(3.0), 1.0);
    assert_eq!(ease_out_quad(-1.0), 0.0);
}

// =============================================================
// Animation
// =============================================================

#[test]
fn thousand_over_two_seconds_ends_exactly_on_target() {
    let anim = CounterAnimation::new(spec(1000), 0.0, 2000.0);
    assert_eq!(anim.sample(0.0), CounterSample { value: 0, done: false });
    assert_eq!(anim.sample(1000.0), CounterSample { value: 750, done: false });
    assert_eq!(anim.sample(2000.0), CounterSample { value: 1000, done: true });
    assert_eq!(anim.sample(2500.0), CounterSample { value: 1000, done: true });
    assert_eq!(anim.text_at(2000.0), ("1000+".to_owned(), true));
}

#[test]
fn frame_sampling_never_overshoots() {
    let anim = CounterAnimation::new(spec(1000), 0.0, 2000.0);
    let mut now = 0.0;
    let mut last = 0;
    loop {
        let sample = anim.sample(now);
        assert!(sample.value <= 1000);
        assert!(sample.value >= last);
        last = sample.value;
        if sample.done {
            break;
        }
        now += 16.0;
    }
    assert_eq!(last, 1000);
}

#[test]
fn zero_duration_finishes_on_first_sample() {
    let anim = CounterAnimation::new(spec(7), 10.0, 0.0);
    assert_eq!(anim.sample(10.0), CounterSample { value: 7, done: true });
}

proptest! {
    #[test]
    fn samples_stay_within_zero_and_target(
        target in 0u64..1_000_000,
        duration in 1.0f64..10_000.0,
        now in -100.0f64..20_000.0,
    ) {
        let anim = CounterAnimation::new(spec(target), 0.0, duration);
        let sample = anim.sample(now);
        prop_assert!(sample.value <= target);
        prop_assert_eq!(sample.done, now >= duration);
        if sample.done {
            prop_assert_eq!(sample.value, target);
        }
    }
}
