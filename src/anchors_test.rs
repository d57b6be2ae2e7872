#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_accepts_same_page_ids() {
    assert_eq!(fragment("#about"), Some("about"));
    assert_eq!(fragment("  #main-content "), Some("main-content"));
}

#[test]
fn fragment_rejects_bare_hash_and_other_documents() {
    assert_eq!(fragment("#"), None);
    assert_eq!(fragment(""), None);
    assert_eq!(fragment("/blog#intro"), None);
    assert_eq!(fragment("https://example.com/#x"), None);
    assert_eq!(fragment("#two words"), None);
}

#[test]
fn scroll_target_subtracts_nav_height() {
    assert_eq!(scroll_target(900.0, 70.0), 830.0);
}

#[test]
fn scroll_target_never_goes_negative() {
    assert_eq!(scroll_target(20.0, 70.0), 0.0);
    assert_eq!(scroll_target(500.0, -10.0), 500.0);
    assert_eq!(scroll_target(f64::NAN, 70.0), 0.0);
}
