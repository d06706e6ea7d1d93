//! Label decoder port - maps class indices back to disease names.

use super::ModelError;

/// Port for decoding predicted class indices.
pub trait LabelDecoder: Send + Sync {
    /// Returns the human-readable disease name for a class index.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownLabel` if the index is out of range.
    fn decode(&self, index: usize) -> Result<String, ModelError>;
}
