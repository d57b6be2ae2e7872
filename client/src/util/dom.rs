//! Small DOM helpers shared by the hosts.

use folio::classes::{AttrChange, ClassChange};
use folio::config::FolioConfig;
use folio::scroll::ScrollSample;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusOptions, HtmlElement, Window};

/// Id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order. An invalid
/// selector yields nothing.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`], scoped to the descendants of `root`.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn apply_class(el: &Element, change: ClassChange) {
    let _ = el.class_list().toggle_with_force(change.class, change.on);
}

pub fn apply_attr(el: &Element, change: AttrChange) {
    let _ = match change.value {
        Some(value) => el.set_attribute(change.name, value),
        None => el.remove_attribute(change.name),
    };
}

/// Current scroll offset and page geometry.
pub fn scroll_sample(window: &Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    ScrollSample::new(offset, document_height, viewport)
}

pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Top edge of `el` in document coordinates.
pub fn document_top(window: &Window, el: &Element) -> f64 {
    el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
}

pub fn outer_height(el: &Element) -> f64 {
    el.get_bounding_client_rect().height()
}

/// Move focus without letting the browser scroll the element into view.
pub fn focus_without_scroll(el: &Element) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    let _ = el.focus_with_options(&options);
}

/// Config from the page's inline JSON block, or defaults.
pub fn read_page_config(document: &Document) -> FolioConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    FolioConfig::load(raw.as_deref())
}
