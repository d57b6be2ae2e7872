//! Browser client for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is static HTML. This crate compiles to WASM, binds the `folio`
//! behavior core to the live document and renders the toast region with
//! Leptos. Browser-only code is behind the `hydrate` feature so the pure
//! helpers and components still build and test natively.
//!
//! The page script calls the exported `mount()` once and keeps the returned
//! `Portfolio` handle; `teardown()` on it removes every listener, observer,
//! frame and timer.

pub mod components;
pub mod hosts;
#[cfg(feature = "hydrate")]
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() -> pages::portfolio::Portfolio {
    pages::portfolio::Portfolio::mount()
}
