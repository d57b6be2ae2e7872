use proptest::prelude::*;

use super::*;

fn counter(target: u64) -> CounterSpec {
    CounterSpec { target, suffix: "%".to_owned() }
}

#[test]
fn register_hands_out_sequential_ids() {
    let mut set = RevealSet::new();
    assert_eq!(set.register(RevealTarget::entrance()), RevealId(0));
    assert_eq!(set.register(RevealTarget::entrance()), RevealId(1));
    assert_eq!(set.len(), 2);
    assert_eq!(set.pending_count(), 2);
}

#[test]
fn first_intersection_reveals_with_payload() {
    let mut set = RevealSet::new();
    let id = set.register(RevealTarget::entrance().with_lazy_src("/img/a.webp").with_counter(counter(98)));
    let revealed = set.on_intersect(id, true);
    assert_eq!(
        revealed,
        Some(Revealed { id, lazy_src: Some("/img/a.webp".to_owned()), counter: Some(counter(98)) })
    );
    assert!(set.get(id).is_some_and(RevealTarget::is_revealed));
}

#[test]
fn non_intersecting_callback_does_nothing() {
    let mut set = RevealSet::new();
    let id = set.register(RevealTarget::entrance());
    assert_eq!(set.on_intersect(id, false), None);
    assert_eq!(set.pending_count(), 1);
}

#[test]
fn reveal_fires_only_once() {
    let mut set = RevealSet::new();
    let id = set.register(RevealTarget::entrance());
    assert!(set.on_intersect(id, true).is_some());
    assert!(set.on_intersect(id, true).is_none());
    assert!(set.on_intersect(id, false).is_none());
    assert!(set.get(id).is_some_and(RevealTarget::is_revealed));
}

#[test]
fn unknown_id_is_ignored() {
    let mut set = RevealSet::new();
    assert_eq!(set.on_intersect(RevealId(3), true), None);
}

#[test]
fn blank_lazy_src_is_dropped() {
    assert_eq!(RevealTarget::entrance().with_lazy_src("  ").lazy_src, None);
}

#[test]
fn reveal_all_skips_already_revealed() {
    let mut set = RevealSet::new();
    let a = set.register(RevealTarget::entrance());
    let b = set.register(RevealTarget::entrance());
    set.on_intersect(a, true);
    let all = set.reveal_all();
    assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b]);
    assert_eq!(set.pending_count(), 0);
}

proptest! {
    #[test]
    fn revealed_stays_revealed(callbacks in prop::collection::vec(any::<bool>(), 1..50)) {
        let mut set = RevealSet::new();
        let id = set.register(RevealTarget::entrance());
        let mut fired = 0;
        let mut seen_true = false;
        for is_intersecting in callbacks {
            if set.on_intersect(id, is_intersecting).is_some() {
                fired += 1;
            }
            seen_true |= is_intersecting;
            prop_assert_eq!(set.get(id).is_some_and(RevealTarget::is_revealed), seen_true);
        }
        prop_assert!(fired <= 1);
    }
}
