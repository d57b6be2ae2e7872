//! Nav chrome, nav visibility and scroll progress.
//!
//! All three are derived from one applied scroll sample. Chrome and progress
//! are pure functions of the sample; visibility also depends on the previous
//! applied offset, which [`ScrollState`] carries between ticks.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Nav background treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavChrome {
    /// Translucent, no shadow.
    #[default]
    AtTop,
    /// Opaque background with shadow.
    Scrolled,
}

/// Whether the nav is slid offscreen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavVisibility {
    #[default]
    Shown,
    Hidden,
}

/// One raw reading of the page's scroll position and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Build a sample, clamping overscroll (negative or NaN offsets) to 0.
    #[must_use]
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { offset: clamp_offset(offset), document_height, viewport_height }
    }

    /// A sample with no geometry; progress resolves to 0.
    #[must_use]
    pub fn at(offset: f64) -> Self {
        Self::new(offset, 0.0, 0.0)
    }
}

/// Thresholds for chrome and visibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub scrolled_offset_px: f64,
    pub hide_offset_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled_offset_px: crate::consts::NAV_SCROLLED_OFFSET_PX,
            hide_offset_px: crate::consts::NAV_HIDE_OFFSET_PX,
        }
    }
}

/// Scroll state owned by the coordinator for the page session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Offset of the last applied tick.
    pub last_offset: f64,
    /// A coalesced frame update is pending.
    pub coalescing: bool,
}

/// Everything one applied tick decides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub chrome: NavChrome,
    pub visibility: NavVisibility,
    pub progress: f64,
}

impl ScrollState {
    /// Apply one sample and advance `last_offset`.
    pub fn advance(&mut self, sample: ScrollSample, thresholds: ScrollThresholds) -> ScrollFrame {
        let offset = clamp_offset(sample.offset);
        let frame = ScrollFrame {
            chrome: nav_chrome(offset, thresholds.scrolled_offset_px),
            visibility: nav_visibility(self.last_offset, offset, thresholds.hide_offset_px),
            progress: progress_ratio(offset, sample.document_height, sample.viewport_height),
        };
        self.last_offset = offset;
        frame
    }
}

#[must_use]
pub fn nav_chrome(offset: f64, threshold: f64) -> NavChrome {
    if offset > threshold { NavChrome::Scrolled } else { NavChrome::AtTop }
}

/// Hidden only while moving down past `threshold`; any upward move shows it.
#[must_use]
pub fn nav_visibility(previous: f64, current: f64, threshold: f64) -> NavVisibility {
    if current > previous && current > threshold {
        NavVisibility::Hidden
    } else {
        NavVisibility::Shown
    }
}

/// Fraction of the scrollable height already scrolled, in `[0, 1]`.
///
/// Content no taller than the viewport has nothing to scroll; the ratio is 0
/// rather than a division by zero.
#[must_use]
pub fn progress_ratio(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let ratio = clamp_offset(offset) / scrollable;
    if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 }
}

fn clamp_offset(offset: f64) -> f64 {
    if offset.is_nan() { 0.0 } else { offset.max(0.0) }
}
