//! Layout domain model.
//!
//! # Responsibility
//! - Define the descriptor stored per registered layout.
//! - Name the built-in layout ids and lookup sentinels.

pub mod layout;
