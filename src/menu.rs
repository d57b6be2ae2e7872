//! Mobile navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::MOBILE_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where keyboard focus goes after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuFocus {
    FirstLink,
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTransition {
    pub state: MenuState,
    pub focus: Option<MenuFocus>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobileMenu {
    state: MenuState,
    breakpoint_px: f64,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX)
    }
}

impl MobileMenu {
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self { state: MenuState::Closed, breakpoint_px }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Toggle button pressed. Opening moves focus into the menu.
    pub fn toggle(&mut self) -> MenuTransition {
        match self.state {
            MenuState::Closed => self.set(MenuState::Open, Some(MenuFocus::FirstLink)),
            MenuState::Open => self.set(MenuState::Closed, None),
        }
    }

    /// Close after a nav link or anchor click. `None` when already closed.
    pub fn close(&mut self) -> Option<MenuTransition> {
        self.is_open().then(|| self.set(MenuState::Closed, None))
    }

    /// Key pressed anywhere on the page. `Escape` closes and returns focus
    /// to the toggle.
    pub fn on_key(&mut self, key: &str) -> Option<MenuTransition> {
        if key != "Escape" || !self.is_open() {
            return None;
        }
        Some(self.set(MenuState::Closed, Some(MenuFocus::Toggle)))
    }

    /// Viewport resized. Growing past the breakpoint closes the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> Option<MenuTransition> {
        if viewport_width <= self.breakpoint_px {
            return None;
        }
        self.close()
    }

    fn set(&mut self, state: MenuState, focus: Option<MenuFocus>) -> MenuTransition {
        self.state = state;
        tracing::debug!(?state, "mobile menu");
        MenuTransition { state, focus }
    }
}
