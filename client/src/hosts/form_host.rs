//! Contact form host: inline validation and the simulated send.
//!
//! Blur validates one field, typing clears that field's error, and submit
//! validates everything, focusing the first invalid field. A valid form is
//! handed to the submit simulator; after its delay the outcome becomes a
//! toast. Teardown aborts an in-flight send so nothing fires afterwards.

#[cfg(test)]
#[path = "form_host_test.rs"]
mod form_host_test;

use folio::form::{ContactForm, Field, FieldError, FormErrors};
use folio::submit::{SubmitError, SubmitSimulator};
use folio::toast::ToastKind;

#[cfg(feature = "hydrate")]
use folio::classes;
#[cfg(feature = "hydrate")]
use folio::config::FolioConfig;
#[cfg(feature = "hydrate")]
use folio::submit::SubmitPhase;
#[cfg(feature = "hydrate")]
use futures::future::{AbortHandle, abortable};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

#[cfg(feature = "hydrate")]
use crate::state::toaster::Toaster;
#[cfg(feature = "hydrate")]
use crate::util::dom::{self, apply_attr, apply_class};
#[cfg(feature = "hydrate")]
use crate::util::listeners::EventListener;

pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";

/// Toast for a settled submission.
pub fn submit_toast(outcome: &Result<ContactForm, SubmitError>) -> (ToastKind, String) {
    match outcome {
        Ok(_) => (ToastKind::Success, SENT_MESSAGE.to_owned()),
        Err(e) => (ToastKind::Error, e.to_string()),
    }
}

/// What a submit event turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A send is already in flight; the event is ignored.
    Busy,
    /// Validation failed; focus moves to this field once the host state is
    /// released, since moving focus fires `focusout` on the form.
    Invalid(Field),
    /// The send started; settle after this many milliseconds.
    Send(u32),
}

/// Validate `raw` and start the send when it is clean.
pub fn plan_submit(errors: &mut FormErrors, submit: &mut SubmitSimulator, raw: &ContactForm) -> SubmitStep {
    if submit.is_sending() {
        return SubmitStep::Busy;
    }
    let clean = match errors.on_submit(raw) {
        Ok(clean) => clean,
        Err(field) => return SubmitStep::Invalid(field),
    };
    match submit.begin(clean) {
        Ok(delay_ms) => SubmitStep::Send(delay_ms),
        Err(_) => SubmitStep::Busy,
    }
}

/// Inline message text for a field; empty when valid.
pub fn error_text(error: Option<FieldError>) -> String {
    error.map(|e| e.to_string()).unwrap_or_default()
}

#[cfg(feature = "hydrate")]
struct Inner {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    errors: FormErrors,
    submit: SubmitSimulator,
    pending: Option<AbortHandle>,
    toaster: Toaster,
}

#[cfg(feature = "hydrate")]
pub struct FormHost {
    inner: Rc<RefCell<Inner>>,
    _listeners: Vec<EventListener>,
}

#[cfg(feature = "hydrate")]
impl FormHost {
    /// `None` when the page has no contact form.
    pub fn mount(document: &Document, config: &FolioConfig, toaster: Toaster) -> Option<Self> {
        let form = dom::query(document, &config.selectors.contact_form)?.dyn_into::<HtmlFormElement>().ok()?;
        let button = form
            .query_selector("[type=submit]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        let inner = Rc::new(RefCell::new(Inner {
            form: form.clone(),
            button,
            errors: FormErrors::default(),
            submit: SubmitSimulator::new(seed, config.submit_failure_rate, config.submit_delay_ms),
            pending: None,
            toaster,
        }));
        let weak = Rc::downgrade(&inner);

        let mut listeners = Vec::new();
        // `blur` does not bubble; `focusout` does.
        let on_blur = {
            let weak = weak.clone();
            move |ev: Event| {
                let Some((field, control)) = field_of(&ev) else {
                    return;
                };
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut inner = inner.borrow_mut();
                let error = inner.errors.on_blur(field, &control_value(&control));
                render_field(&control, error);
            }
        };
        listeners.extend(EventListener::new(&form, "focusout", on_blur));

        let on_input = {
            let weak = weak.clone();
            move |ev: Event| {
                let Some((field, control)) = field_of(&ev) else {
                    return;
                };
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.borrow_mut().errors.on_input(field) {
                    render_field(&control, None);
                }
            }
        };
        listeners.extend(EventListener::new(&form, "input", on_input));

        let on_submit = move |ev: Event| {
            ev.prevent_default();
            submit(&weak);
        };
        listeners.extend(EventListener::new(&form, "submit", on_submit));

        Some(Self { inner, _listeners: listeners })
    }

    /// Abort an in-flight send and restore the button.
    pub fn teardown(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }
        if inner.submit.abort() {
            log::debug!("in-flight submission aborted");
        }
        render_button(inner.button.as_ref(), SubmitPhase::Idle);
    }
}

#[cfg(feature = "hydrate")]
fn submit(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let focus = {
        let mut guard = inner.borrow_mut();
        let inner = &mut *guard;
        let raw = read_form(&inner.form);
        let step = plan_submit(&mut inner.errors, &mut inner.submit, &raw);
        if step == SubmitStep::Busy {
            log::debug!("{}", SubmitError::InFlight);
            return;
        }
        for field in Field::ALL {
            if let Some(control) = control_for(&inner.form, field) {
                render_field(&control, inner.errors.get(field));
            }
        }
        match step {
            SubmitStep::Invalid(field) => control_for(&inner.form, field),
            SubmitStep::Send(delay_ms) => {
                render_button(inner.button.as_ref(), SubmitPhase::Sending);
                let (wait, handle) = abortable(gloo_timers::future::TimeoutFuture::new(delay_ms));
                inner.pending = Some(handle);
                let weak = weak.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if wait.await.is_err() {
                        return;
                    }
                    settle(&weak);
                });
                None
            }
            SubmitStep::Busy => None,
        }
    };
    if let Some(control) = focus {
        dom::focus_without_scroll(&control);
    }
}

#[cfg(feature = "hydrate")]
fn settle(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    inner.pending = None;
    let outcome = inner.submit.resolve();
    if outcome.is_ok() {
        inner.form.reset();
        inner.errors.clear();
    }
    render_button(inner.button.as_ref(), inner.submit.phase());
    let (kind, message) = submit_toast(&outcome);
    inner.toaster.show(kind, message);
}

#[cfg(feature = "hydrate")]
fn read_form(form: &HtmlFormElement) -> ContactForm {
    let value = |field| control_for(form, field).map(|c| control_value(&c)).unwrap_or_default();
    ContactForm { name: value(Field::Name), email: value(Field::Email), message: value(Field::Message) }
}

#[cfg(feature = "hydrate")]
fn control_for(form: &HtmlFormElement, field: Field) -> Option<Element> {
    form.query_selector(&format!("[name=\"{}\"]", field.name())).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// The field whose control fired `ev`.
#[cfg(feature = "hydrate")]
fn field_of(ev: &Event) -> Option<(Field, Element)> {
    let control = ev.target()?.dyn_into::<Element>().ok()?;
    let field = Field::from_name(&control.get_attribute("name")?)?;
    Some((field, control))
}

/// Error class on the field's group, `aria-invalid` on the control and the
/// message text in the group's `.error-message`.
#[cfg(feature = "hydrate")]
fn render_field(control: &Element, error: Option<FieldError>) {
    let (class, attr) = classes::field_error(error.is_some());
    apply_attr(control, attr);
    let Some(group) = control.closest(".form-group").ok().flatten() else {
        return;
    };
    apply_class(&group, class);
    if let Some(slot) = group.query_selector(".error-message").ok().flatten() {
        slot.set_text_content(Some(&error_text(error)));
    }
}

#[cfg(feature = "hydrate")]
fn render_button(button: Option<&HtmlButtonElement>, phase: SubmitPhase) {
    if let Some(button) = button {
        button.set_disabled(phase.button_disabled());
        button.set_text_content(Some(phase.button_label()));
    }
}
