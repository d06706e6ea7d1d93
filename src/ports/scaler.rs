//! Scaling port - transforms raw features into the classifier's training
//! distribution.

use super::ModelError;

/// Port for the feature scaling transform.
///
/// Must be the same transform used when the classifier was trained; a
/// version mismatch is undetectable from inside the core.
pub trait FeatureScaler: Send + Sync {
    /// Scales a raw feature array, preserving order and length.
    ///
    /// # Errors
    /// Returns `ModelError` if the array length does not match the scaler's
    /// parameter count.
    fn scale(&self, raw: &[f64]) -> Result<Vec<f64>, ModelError>;
}
