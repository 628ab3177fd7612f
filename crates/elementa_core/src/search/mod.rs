//! Search and facet filtering entry points.
//!
//! # Responsibility
//! - Derive the visible element subset from the current criteria.
//! - Keep result shaping (counts, markers, auto-open) inside core.

pub mod filter;
