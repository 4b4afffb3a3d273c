//! In-memory registries and the catalog that owns them.
//!
//! # Responsibility
//! - Hold every constructed entity in insertion order.
//! - Enforce cross-entity reference rules on article construction and
//!   reassignment.
//!
//! # Invariants
//! - Registries are append-only; nothing is ever removed.
//! - A failed construction leaves every registry untouched.

pub mod catalog;
pub mod registry;
