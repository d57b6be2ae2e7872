//! Manifest hygiene: every `web-sys` feature the client enables must be used.
//!
//! A feature is used when its type name appears in `src/`, or, for types only
//! reached through a method's return value, when that method does.

use std::fs;
use std::path::Path;

/// Features whose type never appears by name, with the call that needs them.
const REACHED_THROUGH: &[(&str, &str)] = &[
    ("CssStyleDeclaration", ".style()"),
    ("DomRect", "get_bounding_client_rect"),
    ("DomTokenList", ".class_list()"),
    ("Node", "is_connected"),
    ("NodeList", "query_selector_all"),
];

fn sources() -> String {
    let mut out = String::new();
    collect(Path::new("src"), &mut out);
    out
}

fn collect(dir: &Path, out: &mut String) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push_str(&content);
                out.push('\n');
            }
        }
    }
}

fn web_sys_features() -> Vec<String> {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    let Some(start) = manifest.find("web-sys = {") else {
        return Vec::new();
    };
    let block = &manifest[start..];
    let end = block.find("] }").unwrap_or(block.len());
    block[..end]
        .lines()
        .skip(1)
        .filter_map(|line| line.trim().strip_prefix('"')?.split('"').next().map(str::to_owned))
        .collect()
}

fn is_word_in(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + word.len()..].chars().next();
        let boundary = |c: Option<char>| c.is_none_or(|c| !c.is_alphanumeric() && c != '_');
        boundary(before) && boundary(after)
    })
}

#[test]
fn every_web_sys_feature_is_used() {
    let src = sources();
    let features = web_sys_features();
    assert!(!features.is_empty(), "no web-sys features found; run from the client crate root");

    let unused = features
        .iter()
        .filter(|feature| {
            let reached = REACHED_THROUGH
                .iter()
                .any(|(name, call)| name == feature && src.contains(call));
            !reached && !is_word_in(&src, feature)
        })
        .cloned()
        .collect::<Vec<_>>();
    assert!(unused.is_empty(), "web-sys features enabled but unused: {unused:?}");
}

#[test]
fn mouse_event_feature_is_not_enabled() {
    assert!(!web_sys_features().iter().any(|f| f == "MouseEvent"));
}
