//! Mobile menu host: toggle button, Escape, resize and link clicks.

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::FolioConfig;
use folio::menu::{MenuFocus, MenuTransition, MobileMenu};
use web_sys::{Document, Element, KeyboardEvent, Window};
use wasm_bindgen::JsCast;

use crate::util::dom::{self, apply_attr, apply_class};
use crate::util::listeners::EventListener;

struct MenuElements {
    toggle: Element,
    menu: Element,
    body: Option<Element>,
    links: Vec<Element>,
}

/// Shared handle so other hosts (anchors) can close the menu.
#[derive(Clone)]
pub struct MenuHandle {
    menu: Rc<RefCell<MobileMenu>>,
    elements: Rc<MenuElements>,
}

impl MenuHandle {
    /// Close after a navigation. No-op when already closed.
    pub fn close(&self) {
        let transition = self.menu.borrow_mut().close();
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: MenuTransition) {
        let changes = transition.state.changes();
        let MenuElements { toggle, menu, body, links } = &*self.elements;
        apply_class(toggle, changes.toggle.0);
        apply_attr(toggle, changes.toggle.1);
        apply_class(menu, changes.menu);
        if let Some(body) = body {
            apply_class(body, changes.body);
        }
        match transition.focus {
            Some(MenuFocus::FirstLink) => {
                if let Some(first) = links.first() {
                    dom::focus_without_scroll(first);
                }
            }
            Some(MenuFocus::Toggle) => dom::focus_without_scroll(toggle),
            None => {}
        }
    }
}

pub struct MenuHost {
    handle: MenuHandle,
    _listeners: Vec<EventListener>,
}

impl MenuHost {
    /// `None` when the page has no toggle or no menu.
    pub fn mount(window: &Window, document: &Document, config: &FolioConfig) -> Option<Self> {
        let toggle = dom::query(document, &config.selectors.menu_toggle)?;
        let menu = dom::query(document, &config.selectors.menu)?;
        let links = dom::query_within(&menu, "a");
        let body = document.body().map(Element::from);
        let handle = MenuHandle {
            menu: Rc::new(RefCell::new(MobileMenu::new(config.mobile_breakpoint_px))),
            elements: Rc::new(MenuElements { toggle: toggle.clone(), menu, body, links }),
        };
        handle.apply(MenuTransition { state: handle.menu.borrow().state(), focus: None });

        let mut listeners = Vec::new();
        let on_toggle = {
            let handle = handle.clone();
            move |_| {
                let transition = handle.menu.borrow_mut().toggle();
                handle.apply(transition);
            }
        };
        listeners.extend(EventListener::new(&toggle, "click", on_toggle));

        for link in &handle.elements.links {
            let handle = handle.clone();
            listeners.extend(EventListener::new(link, "click", move |_| handle.close()));
        }

        let on_key = {
            let handle = handle.clone();
            move |ev: web_sys::Event| {
                let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let transition = handle.menu.borrow_mut().on_key(&ev.key());
                if let Some(transition) = transition {
                    handle.apply(transition);
                }
            }
        };
        listeners.extend(EventListener::new(document, "keydown", on_key));

        let on_resize = {
            let handle = handle.clone();
            let window = window.clone();
            move |_| {
                let transition = handle.menu.borrow_mut().on_resize(dom::viewport_width(&window));
                if let Some(transition) = transition {
                    handle.apply(transition);
                }
            }
        };
        listeners.extend(EventListener::passive(window, "resize", on_resize));

        Some(Self { handle, _listeners: listeners })
    }

    pub fn handle(&self) -> MenuHandle {
        self.handle.clone()
    }
}
