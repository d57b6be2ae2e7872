//! Behavior hosts binding the `folio` core to the live document.
//!
//! ARCHITECTURE
//! ============
//! Each host owns one core state machine, the elements it writes to and the
//! listeners that feed it. Dropping a host unregisters its listeners; hosts
//! with timers or frames also expose `teardown` to cancel them eagerly.

#[cfg(feature = "hydrate")]
pub mod anchor_host;
pub mod form_host;
#[cfg(feature = "hydrate")]
pub mod menu_host;
#[cfg(feature = "hydrate")]
pub mod scroll_host;
#[cfg(feature = "hydrate")]
pub mod theme_host;
