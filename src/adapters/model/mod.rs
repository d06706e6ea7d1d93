//! Model artifact adapters.
//!
//! The pretrained model ships as a directory of JSON artifacts produced by
//! an out-of-core training process: the feature-name ordering, per-feature
//! scaling parameters, the class label list, and linear classifier weights.
//! The artifacts are assumed to be versioned and mutually consistent
//! externally; loading only checks shape agreement.

mod bundle;

pub use bundle::{ArtifactError, LabelTable, LinearClassifier, ModelBundle, StandardScaler};
