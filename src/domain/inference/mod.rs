//! Inference module - from symptoms and partial values to a complete,
//! classifier-ready feature vector.
//!
//! Covers symptom-to-parameter implication, missing-value completion,
//! derived-feature computation, and the cardiac safety override.

mod cardiac;
mod completer;
mod features;
mod implication;
mod random;

pub use cardiac::{CardiacOverride, RiskAssessment, CARDIAC_LABEL, OVERRIDE_CONFIDENCE};
pub use completer::ValueCompleter;
pub use features::{DerivedFeature, FeatureDeriver, FeatureOrderError, FeatureVector};
pub use implication::{Direction, ImplicationCandidate, SymptomInferencer};
pub use random::RandomSource;
