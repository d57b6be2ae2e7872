//! Utility helpers shared across the hosts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (listeners, frames,
//! storage, geometry) from the behavior hosts to improve reuse and testability.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod listeners;
#[cfg(feature = "hydrate")]
pub mod raf;
