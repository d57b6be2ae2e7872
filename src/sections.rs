//! Page sections and the nav links that point at them.
//!
//! The registry is read once from layout at setup and never reflowed. The
//! highlight scan walks it in registration order and the last section whose
//! vertical extent contains `offset + lead` wins, so an overlapping layout
//! degrades to last-write-wins instead of flickering.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// One page section's vertical extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Inclusive at both edges.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position <= self.top + self.height
    }
}

/// Ordered, immutable list of sections.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Last section containing `offset + lead`, if any.
    #[must_use]
    pub fn active_at(&self, offset: f64, lead: f64) -> Option<&Section> {
        let position = offset + lead;
        self.sections.iter().rev().find(|s| s.contains(position))
    }
}

impl FromIterator<Section> for SectionRegistry {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A change of the active link, by link index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkChange {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Nav links in document order, each optionally targeting a section id.
///
/// Indices match the host's element list, so links without a same-page
/// target still occupy a slot.
#[derive(Clone, Debug, Default)]
pub struct NavLinkSet {
    targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl NavLinkSet {
    #[must_use]
    pub fn new(targets: Vec<Option<String>>) -> Self {
        Self { targets, active: None }
    }

    /// Build from raw `href` values; only `#id` fragments target sections.
    #[must_use]
    pub fn from_hrefs<'a>(hrefs: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let targets = hrefs
            .into_iter()
            .map(|href| href.and_then(crate::anchors::fragment).map(str::to_owned))
            .collect();
        Self::new(targets)
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
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// First link pointing at `section_id`.
    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.targets
            .iter()
            .position(|target| target.as_deref() == Some(section_id))
    }

    /// Make the link for `section_id` the only active link.
    ///
    /// A section with no link clears the active link. Returns the change, or
    /// `None` when the active link is already the right one.
    pub fn activate(&mut self, section_id: &str) -> Option<LinkChange> {
        let next = self.link_for(section_id);
        if next == self.active {
            return None;
        }
        let change = LinkChange { previous: self.active, next };
        self.active = next;
        Some(change)
    }

    /// Links whose markup claims the active state but are not the tracked
    /// active link. `marked[i]` is whether link `i` currently carries it.
    ///
    /// Static markup may ship a pre-activated link; the host clears these at
    /// mount so at most one link is ever active.
    #[must_use]
    pub fn stale_marks(&self, marked: &[bool]) -> Vec<usize> {
        marked
            .iter()
            .enumerate()
            .filter(|&(index, &is_marked)| is_marked && Some(index) != self.active)
            .map(|(index, _)| index)
            .collect()
    }

    /// Clear the active link.
    pub fn clear(&mut self) -> Option<LinkChange> {
        let previous = self.active.take()?;
        Some(LinkChange { previous: Some(previous), next: None })
    }
}
