//! Same-page anchors and skip links.
//!
//! Clicking `href="#id"` scrolls smoothly to the target minus the nav height,
//! closes the mobile menu and moves focus to the target without a second
//! scroll jump. A skip link whose target id is missing falls back to `<main>`.

use folio::anchors;
use folio::config::FolioConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::hosts::menu_host::MenuHandle;
use crate::util::dom;
use crate::util::listeners::EventListener;

const SKIP_LINK_CLASS: &str = "skip-link";

pub struct AnchorHost {
    _listeners: Vec<EventListener>,
}

impl AnchorHost {
    pub fn mount(window: &Window, document: &Document, config: &FolioConfig, menu: Option<MenuHandle>) -> Self {
        let nav = dom::query(document, &config.selectors.nav);
        let main_selector = config.selectors.main.clone();

        let listeners = dom::query_all(document, &config.selectors.anchors)
            .into_iter()
            .filter_map(|anchor| {
                let window = window.clone();
                let document = document.clone();
                let nav = nav.clone();
                let menu = menu.clone();
                let main_selector = main_selector.clone();
                EventListener::new(&anchor, "click", move |ev: Event| {
                    let Some(anchor) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    let Some(target) = resolve_target(&document, &anchor, &main_selector) else {
                        return;
                    };
                    ev.prevent_default();
                    let nav_height = nav.as_ref().map_or(0.0, dom::outer_height);
                    scroll_to(&window, anchors::scroll_target(dom::document_top(&window, &target), nav_height));
                    if let Some(menu) = &menu {
                        menu.close();
                    }
                    focus_target(&target);
                })
            })
            .collect();

        Self { _listeners: listeners }
    }
}

/// The element an anchor points at. `None` lets the browser handle the click.
fn resolve_target(document: &Document, anchor: &Element, main_selector: &str) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    let id = anchors::fragment(&href)?;
    document.get_element_by_id(id).or_else(|| {
        if anchor.class_list().contains(SKIP_LINK_CLASS) {
            dom::query(document, main_selector)
        } else {
            None
        }
    })
}

fn scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Focus the target, making it focusable first when needed.
fn focus_target(target: &Element) {
    if !target.has_attribute("tabindex") {
        let _ = target.set_attribute("tabindex", "-1");
    }
    dom::focus_without_scroll(target);
}
