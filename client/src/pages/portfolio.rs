//! The portfolio page: every host wired to one document.
//!
//! ARCHITECTURE
//! ============
//! [`Portfolio::mount`] reads the page config, mounts each host and the toast
//! region, and returns a handle owned by the page script. There are no
//! statics: dropping the handle (or calling `teardown`) unregisters every
//! listener, disconnects the viewport observer and cancels every frame,
//! timer and pending submission.

use std::any::Any;

use folio::toast::ToastQueue;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use crate::components::toast_region::ToastRegion;
use crate::hosts::anchor_host::AnchorHost;
use crate::hosts::form_host::FormHost;
use crate::hosts::menu_host::MenuHost;
use crate::hosts::scroll_host::ScrollHost;
use crate::hosts::theme_host::ThemeHost;
use crate::state::toaster::Toaster;
use crate::util::dom;

const TOAST_ROOT_ID: &str = "folio-toasts";

struct Hosts {
    scroll: ScrollHost,
    form: Option<FormHost>,
    _menu: Option<MenuHost>,
    _anchors: AnchorHost,
    _theme: ThemeHost,
    toaster: Toaster,
    toast_region: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
pub struct Portfolio {
    hosts: Option<Hosts>,
}

impl Portfolio {
    pub fn mount() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, page behaviors disabled");
            return Self { hosts: None };
        };
        let Some(document) = window.document() else {
            log::warn!("no document, page behaviors disabled");
            return Self { hosts: None };
        };
        let config = dom::read_page_config(&document);

        let toaster = Toaster::new(ToastQueue::new(config.toast_max_visible, f64::from(config.toast_duration_ms)));
        let toast_region = mount_toast_region(&document, toaster.queue());

        let theme = ThemeHost::mount(&window, &document, &config);
        let menu = MenuHost::mount(&window, &document, &config);
        let anchors = AnchorHost::mount(&window, &document, &config, menu.as_ref().map(MenuHost::handle));
        let form = FormHost::mount(&document, &config, toaster.clone());
        let scroll = ScrollHost::mount(&window, &document, &config);

        log::info!("portfolio mounted (theme {})", theme.theme().as_str());
        Self {
            hosts: Some(Hosts {
                scroll,
                form,
                _menu: menu,
                _anchors: anchors,
                _theme: theme,
                toaster,
                toast_region,
            }),
        }
    }
}

#[wasm_bindgen]
impl Portfolio {
    /// Remove every listener and cancel all pending work. Idempotent.
    pub fn teardown(&mut self) {
        let Some(mut hosts) = self.hosts.take() else {
            return;
        };
        hosts.scroll.teardown();
        if let Some(form) = hosts.form.as_mut() {
            form.teardown();
        }
        hosts.toaster.clear();
        let queue = hosts.toaster.queue();
        drop(hosts.toast_region.take());
        queue.dispose();
        log::info!("portfolio torn down");
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.hosts.is_some()
    }
}

/// Mount the toast region into its own container at the end of `<body>`.
fn mount_toast_region(document: &web_sys::Document, queue: RwSignal<ToastQueue>) -> Option<Box<dyn Any>> {
    let body = document.body()?;
    let container = document.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
    container.set_id(TOAST_ROOT_ID);
    body.append_child(&container).ok()?;
    let handle = leptos::mount::mount_to(container, move || view! { <ToastRegion queue=queue /> });
    Some(Box::new(handle))
}
