//! Runtime configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the model artifact directory.
const MODEL_DIR_VAR: &str = "CLINSIGHT_MODEL_DIR";

/// Default artifact directory relative to the working directory.
const DEFAULT_MODEL_DIR: &str = "models";

/// Location of the pretrained model artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    pub model_dir: PathBuf,
}

impl ArtifactConfig {
    /// Builds the configuration from the environment, falling back to the
    /// default directory.
    pub fn from_env() -> Self {
        let model_dir = env::var(MODEL_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_DIR));
        Self { model_dir }
    }

    /// Builds a configuration pointing at an explicit directory.
    pub fn with_model_dir(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::with_model_dir(DEFAULT_MODEL_DIR)
    }
}
