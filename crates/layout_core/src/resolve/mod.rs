//! Active layout resolution.
//!
//! # Responsibility
//! - Describe the request context and the stored-layout lookups it needs.
//! - Apply the override → context option → site option → default chain.
//!
//! # See also
//! - `registry::layout_registry` for typed lookup rules.

pub mod context;
pub mod resolver;
