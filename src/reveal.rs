//! One-shot reveal targets.
//!
//! A target starts `Pending` and flips to `Revealed` the first time the
//! viewport observer reports it intersecting. The flip is monotonic: later
//! callbacks, intersecting or not, are ignored, and the host is told to stop
//! observing the element right away.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::counter::CounterSpec;

/// Index of a target in its [`RevealSet`], stable for the page session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// What an element asks for when it first comes into view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTarget {
    pub state: RevealState,
    /// Deferred image source (`data-src`).
    pub lazy_src: Option<String>,
    /// Counter directive (`data-count` / `data-suffix`).
    pub counter: Option<CounterSpec>,
}

impl RevealTarget {
    #[must_use]
    pub fn entrance() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lazy_src(mut self, src: impl Into<String>) -> Self {
        let src = src.into();
        if !src.trim().is_empty() {
            self.lazy_src = Some(src);
        }
        self
    }

    #[must_use]
    pub fn with_counter(mut self, counter: CounterSpec) -> Self {
        self.counter = Some(counter);
        self
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }
}

/// Payload of a target's single reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revealed {
    pub id: RevealId,
    pub lazy_src: Option<String>,
    pub counter: Option<CounterSpec>,
}

#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    targets: Vec<RevealTarget>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, target: RevealTarget) -> RevealId {
        self.targets.push(target);
        RevealId(self.targets.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RevealId) -> Option<&RevealTarget> {
        self.targets.get(id.0)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_revealed()).count()
    }

    /// Observer callback for one element.
    ///
    /// Returns the reveal payload only on the pending → revealed edge.
    pub fn on_intersect(&mut self, id: RevealId, is_intersecting: bool) -> Option<Revealed> {
        if !is_intersecting {
            return None;
        }
        let target = self.targets.get_mut(id.0)?;
        if target.is_revealed() {
            return None;
        }
        target.state = RevealState::Revealed;
        Some(Revealed { id, lazy_src: target.lazy_src.clone(), counter: target.counter.clone() })
    }

    /// Reveal every pending target at once.
    pub fn reveal_all(&mut self) -> Vec<Revealed> {
        (0..self.targets.len())
            .filter_map(|index| self.on_intersect(RevealId(index), true))
            .collect()
    }
}
