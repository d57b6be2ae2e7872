//! Ease-out counter animation for numeric stats ("120+ projects").

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Target and suffix read from a counter element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CounterSpecError {
    #[error("counter target is empty")]
    Empty,
    #[error("counter target is not a non-negative integer: {0:?}")]
    NotAnInteger(String),
}

impl CounterSpec {
    /// Parse a `data-count` value and optional `data-suffix`.
    ///
    /// Thousands separators (`1,200`, `1_200`) are accepted only between
    /// groups of three digits; `1,2,3` is rejected.
    pub fn parse(raw_target: &str, suffix: Option<&str>) -> Result<Self, CounterSpecError> {
        let trimmed = raw_target.trim();
        if trimmed.is_empty() {
            return Err(CounterSpecError::Empty);
        }
        let not_an_integer = || CounterSpecError::NotAnInteger(trimmed.to_owned());
        let digits = ungroup(trimmed).ok_or_else(not_an_integer)?;
        let target = digits.parse::<u64>().map_err(|_| not_an_integer())?;
        Ok(Self { target, suffix: suffix.unwrap_or_default().to_owned() })
    }

    /// Display text for `value`.
    #[must_use]
    pub fn text(&self, value: u64) -> String {
        format!("{value}{}", self.suffix)
    }
}

/// Digits of `raw` with one kind of thousands separator removed. `None` when
/// a separator is misplaced or two kinds are mixed.
fn ungroup(raw: &str) -> Option<String> {
    let separator = raw.chars().find(|c| matches!(c, ',' | '_'));
    let Some(separator) = separator else {
        return Some(raw.to_owned());
    };
    let mut groups = raw.split(separator);
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }
    let mut digits = head.to_owned();
    for group in groups {
        if group.len() != 3 || group.contains([',', '_']) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// `1 - (1 - x)²`, with `x` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_quad(x: f64) -> f64 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    1.0 - (1.0 - x) * (1.0 - x)
}

/// One animation frame's reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSample {
    pub value: u64,
    pub done: bool,
}

/// A running count from 0 to `spec.target`.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    started_at_ms: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(spec: CounterSpec, started_at_ms: f64, duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() { duration_ms.max(0.0) } else { 0.0 };
        Self { spec, started_at_ms, duration_ms }
    }

    #[must_use]
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Value to display at `now_ms`.
    ///
    /// Intermediate values are floored so they never exceed the target; the
    /// sample at or past the end is exactly the target.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn sample(&self, now_ms: f64) -> CounterSample {
        let elapsed = now_ms - self.started_at_ms;
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return CounterSample { value: self.spec.target, done: true };
        }
        let progress = ease_out_quad(elapsed / self.duration_ms);
        let value = (self.spec.target as f64 * progress).floor() as u64;
        CounterSample { value: value.min(self.spec.target), done: false }
    }

    /// Display text at `now_ms`.
    #[must_use]
    pub fn text_at(&self, now_ms: f64) -> (String, bool) {
        let sample = self.sample(now_ms);
        (self.spec.text(sample.value), sample.done)
    }
}
