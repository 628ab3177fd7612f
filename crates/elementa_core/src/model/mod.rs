//! Domain model for the periodic-table element collection.
//!
//! # Responsibility
//! - Define the canonical element record and its classification enums.
//! - Keep category/phase normalization rules in one place.
//!
//! # Invariants
//! - Every element is identified by a unique atomic `number`.
//! - The loaded collection is immutable for the process lifetime.

pub mod element;
pub mod shells;
