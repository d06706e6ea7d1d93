//! Advice lookup port - prevention and management guidance per disease.

use serde::{Deserialize, Serialize};

/// Structured advice for one disease label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRecord {
    /// One-paragraph description of the condition.
    pub description: String,
    /// Actions to take now.
    pub immediate_actions: Vec<String>,
    /// Ongoing lifestyle guidance.
    pub lifestyle: Vec<String>,
    /// Dietary guidance.
    pub diet: Vec<String>,
}

/// Port for the advice catalog.
///
/// Lookup is total: an unknown label falls back to substring matching
/// against known labels and finally to a generic healthy record, so this
/// never fails.
pub trait AdviceCatalog: Send + Sync {
    /// Returns advice for a disease label.
    fn advice_for(&self, label: &str) -> AdviceRecord;
}
