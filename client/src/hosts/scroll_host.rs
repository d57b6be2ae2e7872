//! Browser host for the scroll-UI coordinator.
//!
//! ARCHITECTURE
//! ============
//! The coordinator decides; this host samples geometry, forwards scroll,
//! resize and intersection events with a timestamp, and applies the returned
//! actions to the nav, progress bar, nav links and reveal targets. Frame and
//! timer requests map to an [`AnimationFrame`] or a gloo [`Timeout`] stored on
//! the host, so replacing or dropping one cancels it.
//!
//! Every callback holds a `Weak` to the host state: once the host is dropped
//! or torn down, late callbacks find nothing to do.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio::classes;
use folio::config::FolioConfig;
use folio::coordinator::{Action, CoordinatorConfig, ScrollCoordinator};
use folio::counter::CounterSpec;
use folio::reveal::{RevealId, RevealTarget};
use folio::sections::{NavLinkSet, Section, SectionRegistry};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::util::dom::{self, apply_attr, apply_class, now_ms};
use crate::util::listeners::EventListener;
use crate::util::raf::AnimationFrame;

/// Attribute carrying each reveal target's coordinator id.
const REVEAL_ID_ATTR: &str = "data-folio-reveal";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Elements {
    nav: Option<Element>,
    progress: Option<HtmlElement>,
    links: Vec<Element>,
    /// Indexed by `RevealId`.
    reveals: Vec<Element>,
}

struct Inner {
    coordinator: ScrollCoordinator,
    elements: Elements,
    frame: Option<AnimationFrame>,
    counter_frame: Option<AnimationFrame>,
    highlight_timer: Option<Timeout>,
    observer: Option<IntersectionObserver>,
}

pub struct ScrollHost {
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<EventListener>,
    _observer_callback: Option<ObserverCallback>,
}

impl ScrollHost {
    pub fn mount(window: &Window, document: &Document, config: &FolioConfig) -> Self {
        let selectors = &config.selectors;
        let nav = dom::query(document, &selectors.nav);
        let progress = dom::query(document, &selectors.progress).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let links = dom::query_all(document, &selectors.nav_links);
        let sections = read_sections(window, document, &selectors.sections);
        let hrefs = links.iter().map(|a| a.get_attribute("href")).collect::<Vec<_>>();
        let link_set = NavLinkSet::from_hrefs(hrefs.iter().map(Option::as_deref));
        let marked = links
            .iter()
            .map(|a| a.class_list().contains(classes::ACTIVE) || a.has_attribute("aria-current"))
            .collect::<Vec<_>>();
        for index in link_set.stale_marks(&marked) {
            let (class, attr) = classes::nav_link(false);
            apply_class(&links[index], class);
            apply_attr(&links[index], attr);
        }

        if nav.is_none() {
            log::debug!("no nav element for {:?}", selectors.nav);
        }
        log::debug!("scroll host: {} sections, {} nav links", sections.len(), links.len());

        let mut coordinator = ScrollCoordinator::new(CoordinatorConfig::from(config), sections, link_set);
        let reveals = register_reveals(document, &selectors.reveal, &mut coordinator);

        let inner = Rc::new(RefCell::new(Inner {
            coordinator,
            elements: Elements { nav, progress, links, reveals },
            frame: None,
            counter_frame: None,
            highlight_timer: None,
            observer: None,
        }));
        let weak = Rc::downgrade(&inner);

        let observer_callback = observe_reveals(window, &weak, config);

        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let weak = weak.clone();
            let window_for_cb = window.clone();
            if let Some(listener) = EventListener::passive(window, event, move |_| {
                let sample = dom::scroll_sample(&window_for_cb);
                run(&weak, |c| c.on_scroll(sample, now_ms()));
            }) {
                listeners.push(listener);
            }
        }

        // Settle the initial state without waiting for a scroll.
        let sample = dom::scroll_sample(window);
        run(&weak, |c| {
            let mut actions = c.on_scroll_tick(sample);
            actions.extend(c.on_section_highlight_tick(sample.offset));
            actions
        });

        Self { inner, listeners, _observer_callback: observer_callback }
    }

    /// Unregister listeners, disconnect the observer and cancel every pending
    /// frame, timer and counter.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        let mut inner = self.inner.borrow_mut();
        inner.coordinator.teardown();
        inner.frame = None;
        inner.counter_frame = None;
        inner.highlight_timer = None;
        if let Some(observer) = inner.observer.take() {
            observer.disconnect();
        }
    }
}

/// Section geometry, read once.
fn read_sections(window: &Window, document: &Document, selector: &str) -> SectionRegistry {
    dom::query_all(document, selector)
        .into_iter()
        .filter(|el| !el.id().is_empty())
        .map(|el| Section::new(el.id(), dom::document_top(window, &el), dom::outer_height(&el)))
        .collect()
}

fn register_reveals(document: &Document, selector: &str, coordinator: &mut ScrollCoordinator) -> Vec<Element> {
    let mut elements = Vec::new();
    for el in dom::query_all(document, selector) {
        let mut target = RevealTarget::entrance();
        if let Some(src) = el.get_attribute("data-src") {
            target = target.with_lazy_src(src);
        }
        if let Some(raw) = el.get_attribute("data-count") {
            let suffix = el.get_attribute("data-suffix");
            match CounterSpec::parse(&raw, suffix.as_deref()) {
                Ok(spec) => target = target.with_counter(spec),
                Err(e) => log::warn!("counter disabled: {e}"),
            }
        }
        let id = coordinator.register_reveal(target);
        let _ = el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string());
        elements.push(el);
    }
    elements
}

/// Observe every reveal target, or reveal them all at once when the browser
/// has no `IntersectionObserver`.
fn observe_reveals(window: &Window, weak: &Weak<RefCell<Inner>>, config: &FolioConfig) -> Option<ObserverCallback> {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        log::warn!("IntersectionObserver unavailable, revealing everything");
        run(weak, ScrollCoordinator::reveal_without_observer);
        return None;
    }

    let weak_for_cb = weak.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let now = now_ms();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(id) = reveal_id(&entry.target()) else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            run(&weak_for_cb, |c| c.on_viewport_intersect(id, intersecting, now));
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&config.reveal_root_margin);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(_) => {
            log::warn!("IntersectionObserver rejected options, revealing everything");
            run(weak, ScrollCoordinator::reveal_without_observer);
            return None;
        }
    };

    let inner = weak.upgrade()?;
    let mut inner = inner.borrow_mut();
    for el in &inner.elements.reveals {
        observer.observe(el);
    }
    inner.observer = Some(observer);
    Some(callback)
}

fn reveal_id(el: &Element) -> Option<RevealId> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok().map(RevealId)
}

/// Feed one event into the coordinator and apply what it returns.
fn run(weak: &Weak<RefCell<Inner>>, event: impl FnOnce(&mut ScrollCoordinator) -> Vec<Action>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    let actions = event(&mut inner.coordinator);
    inner.apply(weak, actions);
}

impl Inner {
    fn apply(&mut self, weak: &Weak<RefCell<Inner>>, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::NavChrome(chrome) => {
                    if let Some(nav) = &self.elements.nav {
                        apply_class(nav, chrome.class_change());
                    }
                }
                Action::NavVisibility(visibility) => {
                    if let Some(nav) = &self.elements.nav {
                        apply_class(nav, visibility.class_change());
                    }
                }
                Action::Progress(ratio) => {
                    if let Some(bar) = &self.elements.progress {
                        let _ = bar.style().set_property("width", &format!("{:.2}%", ratio * 100.0));
                        let _ = bar.set_attribute("aria-valuenow", &format!("{:.0}", ratio * 100.0));
                    }
                }
                Action::ActivateLink(change) => {
                    for (index, active) in [(change.previous, false), (change.next, true)] {
                        let Some(link) = index.and_then(|i| self.elements.links.get(i)) else {
                            continue;
                        };
                        let (class, attr) = classes::nav_link(active);
                        apply_class(link, class);
                        apply_attr(link, attr);
                    }
                }
                Action::Reveal(id) => {
                    if let Some(el) = self.elements.reveals.get(id.0) {
                        apply_class(el, classes::revealed());
                    }
                }
                Action::Unobserve(id) => {
                    if let (Some(observer), Some(el)) = (&self.observer, self.elements.reveals.get(id.0)) {
                        observer.unobserve(el);
                    }
                }
                Action::LoadImage { id, src } => {
                    if let Some(el) = self.elements.reveals.get(id.0) {
                        let _ = el.set_attribute("src", &src);
                        let _ = el.remove_attribute("data-src");
                        apply_class(el, classes::image_loaded());
                    }
                }
                Action::CounterText { id, text } => match self.elements.reveals.get(id.0) {
                    Some(el) if el.is_connected() => el.set_text_content(Some(&text)),
                    _ => {
                        self.coordinator.cancel_counter(id);
                    }
                },
                Action::RequestFrame => {
                    let weak_for_cb = weak.clone();
                    self.frame = AnimationFrame::request(move |_| run(&weak_for_cb, ScrollCoordinator::on_frame));
                    if self.frame.is_none() {
                        // No frame available: apply the pending sample now.
                        let actions = self.coordinator.on_frame();
                        self.apply(weak, actions);
                    }
                }
                Action::ScheduleHighlight { at_ms } => {
                    let weak = weak.clone();
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let delay = (at_ms - now_ms()).max(0.0).ceil() as u32;
                    self.highlight_timer = Some(Timeout::new(delay, move || {
                        run(&weak, |c| c.on_highlight_due(now_ms()));
                    }));
                }
                Action::RequestCounterFrame => {
                    let weak = weak.clone();
                    self.counter_frame =
                        AnimationFrame::request(move |_| run(&weak, |c| c.on_counter_frame(now_ms())));
                }
            }
        }
    }
}
