//! Behavior core for the portfolio page.
//!
//! This crate holds every state transition the page performs in response to
//! scrolling, viewport intersection, clicks and timers, without touching the
//! DOM. The `folio-client` crate owns the browser: it samples geometry, feeds
//! raw events into [`coordinator::ScrollCoordinator`] and the peripheral state
//! machines, and applies the returned [`coordinator::Action`]s and
//! [`classes::ClassChange`]s to real elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coordinator`] | Scroll-UI coordinator and its host-facing action contract |
//! | [`coalesce`] | Trailing-edge throttle/debounce for high-frequency events |
//! | [`scroll`] | Nav chrome, nav visibility and progress ratio |
//! | [`sections`] | Section registry and active nav-link tracking |
//! | [`reveal`] | One-shot reveal targets, lazy image sources, counter directives |
//! | [`counter`] | Ease-out counter animation |
//! | [`classes`] | Enumerated state → CSS class / ARIA attribute changes |
//! | [`theme`] | Light/dark preference resolution and persistence |
//! | [`form`] | Contact-form field validation |
//! | [`submit`] | Simulated form submission |
//! | [`toast`] | Toast notification queue |
//! | [`menu`] | Mobile navigation menu |
//! | [`anchors`] | Same-page anchor parsing and scroll targets |
//! | [`config`] | Tunable constants loaded from the page |
//! | [`consts`] | Default values |

pub mod anchors;
pub mod classes;
pub mod coalesce;
pub mod config;
pub mod consts;
pub mod coordinator;
pub mod counter;
pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod submit;
pub mod theme;
pub mod toast;
