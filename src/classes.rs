//! CSS class and ARIA attribute contract.
//!
//! Every visual state the page can be in maps to a fixed set of class and
//! attribute changes here, so the host can apply them generically and tests
//! can check them without a rendering environment. Class names match the
//! stylesheet shipped with the page.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

use crate::menu::MenuState;
use crate::scroll::{NavChrome, NavVisibility};
use crate::theme::Theme;

pub const SCROLLED: &str = "scrolled";
pub const NAV_HIDDEN: &str = "nav-hidden";
pub const ACTIVE: &str = "active";
pub const REVEALED: &str = "revealed";
pub const LOADED: &str = "loaded";
pub const MENU_OPEN: &str = "menu-open";
pub const FIELD_ERROR: &str = "error";

/// Add or remove one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassChange {
    pub class: &'static str,
    pub on: bool,
}

impl ClassChange {
    #[must_use]
    pub const fn add(class: &'static str) -> Self {
        Self { class, on: true }
    }

    #[must_use]
    pub const fn remove(class: &'static str) -> Self {
        Self { class, on: false }
    }

    #[must_use]
    pub const fn set(class: &'static str, on: bool) -> Self {
        Self { class, on }
    }
}

/// Set or remove one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttrChange {
    pub name: &'static str,
    /// `None` removes the attribute.
    pub value: Option<&'static str>,
}

impl AttrChange {
    #[must_use]
    pub const fn set(name: &'static str, value: &'static str) -> Self {
        Self { name, value: Some(value) }
    }

    #[must_use]
    pub const fn remove(name: &'static str) -> Self {
        Self { name, value: None }
    }
}

impl NavChrome {
    #[must_use]
    pub fn class_change(self) -> ClassChange {
        ClassChange::set(SCROLLED, self == NavChrome::Scrolled)
    }
}

impl NavVisibility {
    #[must_use]
    pub fn class_change(self) -> ClassChange {
        ClassChange::set(NAV_HIDDEN, self == NavVisibility::Hidden)
    }
}

/// Changes for a nav link gaining or losing the active state.
#[must_use]
pub fn nav_link(active: bool) -> (ClassChange, AttrChange) {
    let attr = if active { AttrChange::set("aria-current", "true") } else { AttrChange::remove("aria-current") };
    (ClassChange::set(ACTIVE, active), attr)
}

/// Change for a target that has been revealed.
#[must_use]
pub fn revealed() -> ClassChange {
    ClassChange::add(REVEALED)
}

/// Change for an image whose deferred source has been swapped in.
#[must_use]
pub fn image_loaded() -> ClassChange {
    ClassChange::add(LOADED)
}

/// Changes for the menu toggle button, the menu itself and `<body>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChanges {
    pub toggle: (ClassChange, AttrChange),
    pub menu: ClassChange,
    pub body: ClassChange,
}

impl MenuState {
    #[must_use]
    pub fn changes(self) -> MenuChanges {
        let open = self == MenuState::Open;
        let expanded = if open { "true" } else { "false" };
        MenuChanges {
            toggle: (ClassChange::set(ACTIVE, open), AttrChange::set("aria-expanded", expanded)),
            menu: ClassChange::set(ACTIVE, open),
            body: ClassChange::set(MENU_OPEN, open),
        }
    }
}

impl Theme {
    /// `data-theme` on the document element.
    #[must_use]
    pub fn root_attr(self) -> AttrChange {
        AttrChange::set("data-theme", self.as_str())
    }

    /// `aria-pressed` and `aria-label` for the toggle control.
    #[must_use]
    pub fn toggle_attrs(self) -> [AttrChange; 2] {
        match self {
            Theme::Dark => [
                AttrChange::set("aria-pressed", "true"),
                AttrChange::set("aria-label", "Switch to light theme"),
            ],
            Theme::Light => [
                AttrChange::set("aria-pressed", "false"),
                AttrChange::set("aria-label", "Switch to dark theme"),
            ],
        }
    }
}

/// Changes for a form field's group and control.
#[must_use]
pub fn field_error(invalid: bool) -> (ClassChange, AttrChange) {
    let attr = if invalid { AttrChange::set("aria-invalid", "true") } else { AttrChange::remove("aria-invalid") };
    (ClassChange::set(FIELD_ERROR, invalid), attr)
}
