//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page itself is static HTML; the only Leptos-rendered surface is the
//! toast region.

pub mod toast_region;
