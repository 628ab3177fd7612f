//! Dataset retrieval and decoding entry points.
//!
//! # Responsibility
//! - Fetch the element feed exactly once per session and decode it.
//! - Surface one terminal error type for every load failure mode.
//!
//! # Invariants
//! - A single attempt per call: no retry, no backoff, no caching layer.
//! - Individual malformed records are dropped, never a total failure.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod loader;

pub use loader::{load, parse_dataset, DEFAULT_DATASET_URL};

/// Result type for dataset APIs.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Terminal load error; callers render an error state instead of retrying.
#[derive(Debug)]
pub enum DatasetError {
    /// Transport-level failure reaching the dataset URL.
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// Payload is not the expected `{ "elements": [...] }` JSON shape.
    Decode(serde_json::Error),
    /// Two surviving records share an atomic number.
    DuplicateNumber(u32),
    /// Every record was dropped as malformed.
    EmptyDataset,
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "dataset unavailable: {err}"),
            Self::Status { url, status } => {
                write!(f, "dataset unavailable: `{url}` answered HTTP {status}")
            }
            Self::Decode(err) => write!(f, "invalid dataset payload: {err}"),
            Self::DuplicateNumber(number) => {
                write!(f, "duplicate atomic number {number} in dataset")
            }
            Self::EmptyDataset => write!(f, "dataset contains no usable element records"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DatasetError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}
