//! Theme toggle host.
//!
//! Applies the resolved theme at mount, flips it on toggle clicks, and
//! follows `prefers-color-scheme` changes until the user has chosen.

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::FolioConfig;
use folio::theme::{Theme, ThemeController};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList, Window};

use crate::util::dark_mode::{self, DARK_QUERY, LocalStore};
use crate::util::dom::{self, apply_attr};
use crate::util::listeners::EventListener;

pub struct ThemeHost {
    controller: Rc<RefCell<ThemeController<LocalStore>>>,
    _listeners: Vec<EventListener>,
}

impl ThemeHost {
    pub fn mount(window: &Window, document: &Document, config: &FolioConfig) -> Self {
        let controller = Rc::new(RefCell::new(ThemeController::new(
            LocalStore::open(),
            config.theme_storage_key.clone(),
            dark_mode::system_prefers_dark(),
        )));
        let toggles = Rc::new(dom::query_all(document, &config.selectors.theme_toggle));
        render(controller.borrow().theme(), &toggles);

        let mut listeners = Vec::new();
        for toggle in toggles.iter() {
            let controller = Rc::clone(&controller);
            let toggles = Rc::clone(&toggles);
            listeners.extend(EventListener::new(toggle, "click", move |_| {
                let theme = controller.borrow_mut().toggle();
                render(theme, &toggles);
            }));
        }

        if let Some(query) = window.match_media(DARK_QUERY).ok().flatten() {
            let controller = Rc::clone(&controller);
            let toggles = Rc::clone(&toggles);
            listeners.extend(EventListener::new(&query, "change", move |ev| {
                let Some(query) = ev.current_target().and_then(|t| t.dyn_into::<MediaQueryList>().ok()) else {
                    return;
                };
                let changed = controller.borrow_mut().on_system_change(query.matches());
                if let Some(theme) = changed {
                    render(theme, &toggles);
                }
            }));
        }

        Self { controller, _listeners: listeners }
    }

    pub fn theme(&self) -> Theme {
        self.controller.borrow().theme()
    }
}

fn render(theme: Theme, toggles: &[Element]) {
    dark_mode::apply(theme);
    for toggle in toggles {
        for attr in theme.toggle_attrs() {
            apply_attr(toggle, attr);
        }
    }
}
