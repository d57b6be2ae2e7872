use proptest::prelude::*;

use super::*;

fn registry() -> SectionRegistry {
    [
        Section::new("home", 0.0, 600.0),
        Section::new("about", 600.0, 800.0),
        Section::new("projects", 1400.0, 1000.0),
        Section::new("contact", 2400.0, 600.0),
    ]
    .into_iter()
    .collect()
}

fn links() -> NavLinkSet {
    NavLinkSet::from_hrefs([Some("#home"), Some("#about"), Some("#projects"), Some("#contact")])
}

// =============================================================
// SectionRegistry
// =============================================================

#[test]
fn active_at_applies_lead() {
    let reg = registry();
    // 520 + 100 = 620 falls inside "about" even though its top is below.
    assert_eq!(reg.active_at(520.0, 100.0).map(|s| s.id.as_str()), Some("about"));
    assert_eq!(reg.active_at(0.0, 100.0).map(|s| s.id.as_str()), Some("home"));
}

#[test]
fn active_at_is_inclusive_at_both_edges() {
    let reg = SectionRegistry::new(vec![Section::new("only", 100.0, 100.0)]);
    assert!(reg.active_at(0.0, 100.0).is_some());
    assert!(reg.active_at(100.0, 100.0).is_some());
    assert!(reg.active_at(100.5, 100.0).is_none());
}

#[test]
fn active_at_last_match_wins_on_overlap() {
    let reg = SectionRegistry::new(vec![Section::new("a", 0.0, 1000.0), Section::new("b", 400.0, 200.0)]);
    assert_eq!(reg.active_at(400.0, 100.0).map(|s| s.id.as_str()), Some("b"));
}

#[test]
fn active_at_returns_none_past_last_section() {
    assert!(registry().active_at(5000.0, 100.0).is_none());
    assert!(SectionRegistry::default().active_at(0.0, 100.0).is_none());
}

// =============================================================
// NavLinkSet
// =============================================================

#[test]
fn from_hrefs_keeps_slots_for_external_links() {
    let set = NavLinkSet::from_hrefs([Some("#about"), Some("/resume.pdf"), None, Some("#contact")]);
    assert_eq!(set.len(), 4);
    assert_eq!(set.link_for("about"), Some(0));
    assert_eq!(set.link_for("contact"), Some(3));
}

#[test]
fn activate_reports_change_once() {
    let mut set = links();
    assert_eq!(set.activate("about"), Some(LinkChange { previous: None, next: Some(1) }));
    assert_eq!(set.activate("about"), None);
    assert_eq!(set.activate("contact"), Some(LinkChange { previous: Some(1), next: Some(3) }));
    assert_eq!(set.active(), Some(3));
}

#[test]
fn activate_unlinked_section_clears_active() {
    let mut set = links();
    set.activate("home");
    assert_eq!(set.activate("footer"), Some(LinkChange { previous: Some(0), next: None }));
    assert_eq!(set.active(), None);
}

#[test]
fn clear_is_idempotent() {
    let mut set = links();
    set.activate("home");
    assert!(set.clear().is_some());
    assert!(set.clear().is_none());
}

#[test]
fn stale_marks_lists_preactivated_links_before_first_match() {
    // Markup ships `#home` as active; nothing tracked yet.
    let set = links();
    assert_eq!(set.stale_marks(&[true, false, false, false]), vec![0]);
}

#[test]
fn stale_marks_keeps_tracked_active_link() {
    let mut set = links();
    set.activate("projects");
    assert_eq!(set.stale_marks(&[true, false, true, false]), vec![0]);
    assert!(set.stale_marks(&[false, false, true, false]).is_empty());
}

#[test]
fn stale_marks_then_activation_leaves_one_active_link() {
    let mut set = links();
    let mut marked = vec![true, false, false, false];
    for index in set.stale_marks(&marked) {
        marked[index] = false;
    }
    if let Some(change) = set.activate("contact") {
        if let Some(previous) = change.previous {
            marked[previous] = false;
        }
        if let Some(next) = change.next {
            marked[next] = true;
        }
    }
    assert_eq!(marked, vec![false, false, false, true]);
}

proptest! {
    #[test]
    fn at_most_one_link_active_and_it_matches_last_match(
        offsets in prop::collection::vec(0.0f64..3500.0, 1..40),
    ) {
        let reg = registry();
        let mut set = links();
        let mut expected = None;
        for offset in offsets {
            if let Some(section) = reg.active_at(offset, 100.0) {
                set.activate(&section.id);
                expected = set.link_for(&section.id);
            }
            prop_assert!(set.active().is_none_or(|i| i < set.len()));
        }
        prop_assert_eq!(set.active(), expected);
    }
}
