//! Two-element comparison: pin selection and derived analytics.
//!
//! # Responsibility
//! - Maintain the pinned-pair selection and comparison-mode flag.
//! - Derive the numeric comparison facts consumed by chart rendering.
//!
//! # Invariants
//! - At most 2 elements are pinned, unique by atomic number.
//! - Analytics are pure derivations, recomputed on demand.

pub mod analytics;
pub mod selection;
