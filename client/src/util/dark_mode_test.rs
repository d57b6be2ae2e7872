#![cfg(not(feature = "hydrate"))]

use folio::theme::ThemeController;

use super::*;

#[test]
fn local_store_is_unavailable_in_non_hydrate_tests() {
    let mut store = LocalStore::open();
    assert_eq!(store.get("theme"), Err(StoreError::Unavailable));
    assert_eq!(store.set("theme", "dark"), Err(StoreError::Unavailable));
}

#[test]
fn system_preference_is_light_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn controller_still_toggles_without_storage() {
    let mut controller = ThemeController::new(LocalStore::open(), "theme", system_prefers_dark());
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert!(controller.is_explicit());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
