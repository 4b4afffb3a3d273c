//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records and their typed identities.
//! - Own every field-level rule (length bounds, non-empty text).
//!
//! # Invariants
//! - Entities are only constructed through validating constructors.
//! - Post-construction setters never leave a field in an invalid state.

pub mod article;
pub mod author;
pub mod id;
pub mod magazine;
pub mod validation;
