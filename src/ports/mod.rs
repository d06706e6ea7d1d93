//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! triage core and the outside world; adapters implement them.
//!
//! The classifier, scaler, and label decoder together stand in for the
//! opaque pretrained model artifacts. They are assumed to be versioned and
//! mutually consistent externally; the core only surfaces a failure when an
//! invocation errors.
//!
//! All ports are synchronous: the core is a single-threaded pure
//! computation and the classifier call is a blocking external invocation
//! with no partial results.

mod advice;
mod classifier;
mod decoder;
mod scaler;

pub use advice::{AdviceCatalog, AdviceRecord};
pub use classifier::{Classifier, RawPrediction};
pub use decoder::LabelDecoder;
pub use scaler::FeatureScaler;

use thiserror::Error;

/// Errors surfaced by the model collaborators.
///
/// Caught at the turn boundary; never terminates the hosting process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("feature count mismatch: expected {expected}, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("unknown label index {0}")]
    UnknownLabel(usize),
}
