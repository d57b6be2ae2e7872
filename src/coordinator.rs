//! Scroll-UI coordinator.
//!
//! ARCHITECTURE
//! ============
//! The coordinator owns every piece of scroll-driven state on the page: the
//! [`ScrollState`], both coalescers, the section registry, the active nav
//! link, the reveal targets and any running counters. The host feeds it raw
//! events with a timestamp and applies the [`Action`]s it returns; it never
//! reads the DOM itself, so every transition is testable natively.
//!
//! Two coalescing granularities run side by side:
//! - the frame coalescer (≈16 ms, throttle) drives nav chrome, nav
//!   visibility and the progress bar;
//! - the highlight coalescer (≈100 ms, debounce by default) drives the
//!   section scan, which walks the whole registry.
//!
//! Both are trailing-edge, so once scrolling stops the page always converges
//! on the final scroll position.
//!
//! Scroll callbacks only touch scroll state and the active link; intersection
//! callbacks only touch per-target reveal flags. The two may interleave
//! freely.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use std::collections::BTreeMap;

use crate::coalesce::{CoalesceMode, Coalescer};
use crate::config::FolioConfig;
use crate::counter::CounterAnimation;
use crate::reveal::{RevealId, RevealSet, RevealState, RevealTarget, Revealed};
use crate::scroll::{NavChrome, NavVisibility, ScrollFrame, ScrollSample, ScrollState, ScrollThresholds};
use crate::sections::{LinkChange, NavLinkSet, SectionRegistry};

/// Side effects for the host to perform, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    NavChrome(NavChrome),
    NavVisibility(NavVisibility),
    /// Progress bar fill, in `[0, 1]`.
    Progress(f64),
    ActivateLink(LinkChange),
    /// Apply the entrance class.
    Reveal(RevealId),
    /// Stop observing the element.
    Unobserve(RevealId),
    /// Swap the deferred image source in.
    LoadImage { id: RevealId, src: String },
    CounterText { id: RevealId, text: String },
    /// Call [`ScrollCoordinator::on_frame`] on the next animation frame.
    RequestFrame,
    /// Call [`ScrollCoordinator::on_highlight_due`] at `at_ms`, replacing any
    /// earlier highlight timer.
    ScheduleHighlight { at_ms: f64 },
    /// Call [`ScrollCoordinator::on_counter_frame`] on the next animation frame.
    RequestCounterFrame,
}

/// The subset of [`FolioConfig`] the coordinator uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinatorConfig {
    pub thresholds: ScrollThresholds,
    pub activation_lead_px: f64,
    pub frame_window_ms: f64,
    pub highlight_window_ms: f64,
    pub highlight_mode: CoalesceMode,
    pub counter_duration_ms: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::from(&FolioConfig::default())
    }
}

impl From<&FolioConfig> for CoordinatorConfig {
    fn from(config: &FolioConfig) -> Self {
        Self {
            thresholds: config.thresholds(),
            activation_lead_px: config.activation_lead_px,
            frame_window_ms: config.frame_window_ms,
            highlight_window_ms: config.highlight_window_ms,
            highlight_mode: config.highlight_mode,
            counter_duration_ms: config.counter_duration_ms,
        }
    }
}

pub struct ScrollCoordinator {
    config: CoordinatorConfig,
    scroll: ScrollState,
    last_frame: Option<ScrollFrame>,
    frame: Coalescer<ScrollSample>,
    highlight: Coalescer<f64>,
    sections: SectionRegistry,
    links: NavLinkSet,
    reveals: RevealSet,
    counters: BTreeMap<RevealId, CounterAnimation>,
    torn_down: bool,
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new(config: CoordinatorConfig, sections: SectionRegistry, links: NavLinkSet) -> Self {
        Self {
            frame: Coalescer::new(CoalesceMode::Throttle, config.frame_window_ms),
            highlight: Coalescer::new(config.highlight_mode, config.highlight_window_ms),
            config,
            scroll: ScrollState::default(),
            last_frame: None,
            sections,
            links,
            reveals: RevealSet::new(),
            counters: BTreeMap::new(),
            torn_down: false,
        }
    }

    // --- Scroll ---

    /// Raw scroll or resize event.
    pub fn on_scroll(&mut self, sample: ScrollSample, now_ms: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.torn_down {
            return actions;
        }

        let armed = self.frame.push(sample, now_ms).is_some();
        if let Some(due) = self.frame.take_due(now_ms) {
            self.scroll.coalescing = false;
            actions.extend(self.on_scroll_tick(due));
        } else if armed {
            self.scroll.coalescing = true;
            actions.push(Action::RequestFrame);
        }

        if !self.sections.is_empty() {
            let deadline = self.highlight.push(sample.offset, now_ms);
            if let Some(offset) = self.highlight.take_due(now_ms) {
                actions.extend(self.on_section_highlight_tick(offset));
            } else if let Some(at_ms) = deadline {
                actions.push(Action::ScheduleHighlight { at_ms });
            }
        }
        actions
    }

    /// The animation frame requested by [`Action::RequestFrame`].
    pub fn on_frame(&mut self) -> Vec<Action> {
        self.scroll.coalescing = false;
        match self.frame.flush() {
            Some(sample) if !self.torn_down => self.on_scroll_tick(sample),
            _ => Vec::new(),
        }
    }

    /// The timer requested by [`Action::ScheduleHighlight`].
    ///
    /// A timer that fires ahead of the current deadline is re-armed rather
    /// than dropped.
    pub fn on_highlight_due(&mut self, now_ms: f64) -> Vec<Action> {
        if self.torn_down {
            return Vec::new();
        }
        if let Some(at_ms) = self.highlight.deadline() {
            if now_ms < at_ms {
                return vec![Action::ScheduleHighlight { at_ms }];
            }
        }
        match self.highlight.flush() {
            Some(offset) => self.on_section_highlight_tick(offset),
            None => Vec::new(),
        }
    }

    /// Nav chrome, nav visibility and progress for one applied sample.
    ///
    /// Only states that differ from the previous tick produce actions.
    #[allow(clippy::float_cmp)]
    pub fn on_scroll_tick(&mut self, sample: ScrollSample) -> Vec<Action> {
        let frame = self.scroll.advance(sample, self.config.thresholds);
        let previous = self.last_frame.replace(frame);
        let mut actions = Vec::new();

        if previous.is_none_or(|p| p.chrome != frame.chrome) {
            actions.push(Action::NavChrome(frame.chrome));
        }
        if previous.is_none_or(|p| p.visibility != frame.visibility) {
            tracing::debug!(offset = sample.offset, visibility = ?frame.visibility, "nav visibility changed");
            actions.push(Action::NavVisibility(frame.visibility));
        }
        if previous.is_none_or(|p| p.progress != frame.progress) {
            actions.push(Action::Progress(frame.progress));
        }
        actions
    }

    /// Section scan for one applied offset.
    ///
    /// No matching section leaves the active link as it was.
    pub fn on_section_highlight_tick(&mut self, offset: f64) -> Vec<Action> {
        let Some(section) = self.sections.active_at(offset, self.config.activation_lead_px) else {
            return Vec::new();
        };
        let section_id = section.id.clone();
        match self.links.activate(&section_id) {
            Some(change) => {
                tracing::debug!(section = %section_id, link = ?change.next, "active section changed");
                vec![Action::ActivateLink(change)]
            }
            None => Vec::new(),
        }
    }

    // --- Reveal ---

    pub fn register_reveal(&mut self, target: RevealTarget) -> RevealId {
        self.reveals.register(target)
    }

    /// Viewport observer callback for one element.
    pub fn on_viewport_intersect(&mut self, id: RevealId, is_intersecting: bool, now_ms: f64) -> Vec<Action> {
        if self.torn_down {
            return Vec::new();
        }
        let Some(revealed) = self.reveals.on_intersect(id, is_intersecting) else {
            return Vec::new();
        };
        tracing::debug!(reveal = id.0, "revealed");

        let Revealed { id, lazy_src, counter } = revealed;
        let mut actions = vec![Action::Reveal(id)];
        if let Some(src) = lazy_src {
            actions.push(Action::LoadImage { id, src });
        }
        actions.push(Action::Unobserve(id));

        if let Some(spec) = counter {
            let idle = self.counters.is_empty();
            actions.push(Action::CounterText { id, text: spec.text(0) });
            self.counters
                .insert(id, CounterAnimation::new(spec, now_ms, self.config.counter_duration_ms));
            if idle {
                actions.push(Action::RequestCounterFrame);
            }
        }
        actions
    }

    /// The animation frame requested by [`Action::RequestCounterFrame`].
    pub fn on_counter_frame(&mut self, now_ms: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut finished = Vec::new();
        for (id, animation) in &self.counters {
            let (text, done) = animation.text_at(now_ms);
            actions.push(Action::CounterText { id: *id, text });
            if done {
                finished.push(*id);
            }
        }
        for id in finished {
            self.counters.remove(&id);
        }
        if !self.counters.is_empty() {
            actions.push(Action::RequestCounterFrame);
        }
        actions
    }

    /// Stop animating a counter whose element left the document.
    pub fn cancel_counter(&mut self, id: RevealId) -> bool {
        self.counters.remove(&id).is_some()
    }

    /// Degraded mode without a viewport observer: reveal everything now,
    /// load every deferred image and show counters at their final value.
    pub fn reveal_without_observer(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for Revealed { id, lazy_src, counter } in self.reveals.reveal_all() {
            actions.push(Action::Reveal(id));
            if let Some(src) = lazy_src {
                actions.push(Action::LoadImage { id, src });
            }
            if let Some(spec) = counter {
                actions.push(Action::CounterText { id, text: spec.text(spec.target) });
            }
        }
        actions
    }

    // --- Lifecycle ---

    /// Cancel pending coalesced updates and counters; later events are ignored.
    pub fn teardown(&mut self) {
        self.frame.cancel();
        self.highlight.cancel();
        self.counters.clear();
        self.scroll.coalescing = false;
        self.torn_down = true;
    }

    // --- Queries ---

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// The most recently applied frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<ScrollFrame> {
        self.last_frame
    }

    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.links.active()
    }

    #[must_use]
    pub fn reveal_state(&self, id: RevealId) -> Option<RevealState> {
        self.reveals.get(id).map(|t| t.state)
    }

    #[must_use]
    pub fn running_counters(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
