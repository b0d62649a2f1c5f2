//! Layout registration and typed lookup.
//!
//! # Responsibility
//! - Hold registered layouts and the single default flag.
//! - Build most-specific-first lookup chains from context types.
//! - Seed the built-in layouts at startup.
//!
//! # Invariants
//! - Registration order is listing order.
//! - No ambient global registry; callers own a value or a shared handle.

pub mod builtin;
pub mod layout_registry;
pub mod shared;
pub mod type_filter;
