//! JSON artifact bundle implementing the classifier, scaler, and decoder
//! ports.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::ports::{Classifier, FeatureScaler, LabelDecoder, ModelError, RawPrediction};

/// Errors raised while loading model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {name}: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact shape mismatch: {0}")]
    Shape(String),
}

#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

fn read_artifact<T: serde::de::DeserializeOwned>(
    dir: &Path,
    name: &'static str,
) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(dir.join(name)).map_err(|source| ArtifactError::Io { name, source })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Json { name, source })
}

/// Standard-score scaler with precomputed per-feature parameters.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl FeatureScaler for StandardScaler {
    fn scale(&self, raw: &[f64]) -> Result<Vec<f64>, ModelError> {
        if raw.len() != self.mean.len() {
            return Err(ModelError::FeatureCount {
                expected: self.mean.len(),
                actual: raw.len(),
            });
        }

        Ok(raw
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| (value - mean) / scale)
            .collect())
    }
}

/// Linear softmax classifier over scaled features.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    feature_names: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    fn logits(&self, scaled: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept + row.iter().zip(scaled).map(|(w, x)| w * x).sum::<f64>()
            })
            .collect()
    }

    /// Softmax with max subtraction for numerical stability.
    fn softmax(logits: &[f64]) -> Vec<f64> {
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.iter().map(|e| e / total).collect()
    }
}

impl Classifier for LinearClassifier {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, scaled: &[f64]) -> Result<RawPrediction, ModelError> {
        if scaled.len() != self.feature_names.len() {
            return Err(ModelError::FeatureCount {
                expected: self.feature_names.len(),
                actual: scaled.len(),
            });
        }

        let probabilities = Self::softmax(&self.logits(scaled));
        let label_index = probabilities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .ok_or_else(|| ModelError::Inference("empty class set".to_string()))?;

        Ok(RawPrediction {
            label_index,
            probabilities,
        })
    }
}

/// Label list implementing the decoder port.
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelDecoder for LabelTable {
    fn decode(&self, index: usize) -> Result<String, ModelError> {
        self.labels
            .get(index)
            .cloned()
            .ok_or(ModelError::UnknownLabel(index))
    }
}

/// The full set of model artifacts loaded from one directory.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    classifier: LinearClassifier,
    scaler: StandardScaler,
    labels: LabelTable,
}

impl ModelBundle {
    /// Loads and shape-checks all artifacts from a directory.
    ///
    /// Expects `feature_names.json`, `scaler.json`, `labels.json`, and
    /// `model.json`.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let feature_names: Vec<String> = read_artifact(dir, "feature_names.json")?;
        let scaler: ScalerArtifact = read_artifact(dir, "scaler.json")?;
        let labels: Vec<String> = read_artifact(dir, "labels.json")?;
        let model: ModelArtifact = read_artifact(dir, "model.json")?;

        let features = feature_names.len();
        if scaler.mean.len() != features || scaler.scale.len() != features {
            return Err(ArtifactError::Shape(format!(
                "scaler covers {}x{} features, expected {features}",
                scaler.mean.len(),
                scaler.scale.len()
            )));
        }
        if scaler.scale.iter().any(|s| *s == 0.0) {
            return Err(ArtifactError::Shape("scaler contains a zero scale entry".to_string()));
        }
        if model.coefficients.len() != labels.len() || model.intercepts.len() != labels.len() {
            return Err(ArtifactError::Shape(format!(
                "model has {} coefficient rows and {} intercepts for {} labels",
                model.coefficients.len(),
                model.intercepts.len(),
                labels.len()
            )));
        }
        if let Some(row) = model.coefficients.iter().find(|row| row.len() != features) {
            return Err(ArtifactError::Shape(format!(
                "coefficient row has {} entries, expected {features}",
                row.len()
            )));
        }

        info!(features, classes = labels.len(), "model artifacts loaded");

        Ok(Self {
            classifier: LinearClassifier {
                feature_names,
                coefficients: model.coefficients,
                intercepts: model.intercepts,
            },
            scaler: StandardScaler {
                mean: scaler.mean,
                scale: scaler.scale,
            },
            labels: LabelTable { labels },
        })
    }

    /// Splits the bundle into its three port implementations.
    pub fn into_handles(self) -> (LinearClassifier, StandardScaler, LabelTable) {
        (self.classifier, self.scaler, self.labels)
    }
}
