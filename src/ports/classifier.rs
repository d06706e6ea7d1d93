//! Classifier port - the pretrained disease classifier.

use super::ModelError;

/// Raw output of one classifier invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    /// Index of the winning class.
    pub label_index: usize,
    /// Per-class probability distribution, aligned with the decoder.
    pub probabilities: Vec<f64>,
}

impl RawPrediction {
    /// Returns the winning probability as a percentage.
    pub fn confidence_percent(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
            * 100.0
    }
}

/// Port for the pretrained classifier.
///
/// The feature vector must be ordered by `feature_names` before invocation;
/// the core reindexes into that exact ordering each turn.
pub trait Classifier: Send + Sync {
    /// The fixed feature ordering this classifier was trained on.
    fn feature_names(&self) -> &[String];

    /// Predicts a class from an already-scaled feature array.
    ///
    /// # Errors
    /// Returns `ModelError` if the array shape is wrong or inference fails.
    fn predict(&self, scaled: &[f64]) -> Result<RawPrediction, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_max_probability_as_percent() {
        let prediction = RawPrediction {
            label_index: 1,
            probabilities: vec![0.1, 0.65, 0.25],
        };
        assert!((prediction.confidence_percent() - 65.0).abs() < 1e-9);
    }

    #[test]
    fn confidence_of_empty_distribution_is_zero() {
        let prediction = RawPrediction {
            label_index: 0,
            probabilities: vec![],
        };
        assert_eq!(prediction.confidence_percent(), 0.0);
    }
}
