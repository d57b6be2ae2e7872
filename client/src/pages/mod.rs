//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! A page owns the orchestration of its hosts and delegates rendering details
//! to `components`.

pub mod portfolio;
