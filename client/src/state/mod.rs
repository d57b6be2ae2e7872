//! Shared client state.
//!
//! DESIGN
//! ======
//! Only the toast queue is reactive; every other behavior keeps its state in
//! the `folio` core machines owned by its host.

pub mod toaster;
