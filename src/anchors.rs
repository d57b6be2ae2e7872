//! Same-page anchors: smooth-scroll targets and skip links.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Section id targeted by a same-page `href`.
///
/// Only bare fragments count (`#about`); `#` alone, empty ids and links to
/// other documents return `None` and keep their default behavior.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// Window offset that puts `section_top` just below a nav of `nav_height`.
#[must_use]
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    let nav_height = if nav_height.is_finite() { nav_height.max(0.0) } else { 0.0 };
    let target = section_top - nav_height;
    if target.is_finite() { target.max(0.0) } else { 0.0 }
}
