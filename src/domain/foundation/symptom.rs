//! SymptomTag enum - the closed symptom vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical identifier for a cluster of natural-language symptom phrases.
///
/// Emitted at most once per extraction pass regardless of how many matching
/// phrases appear in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomTag {
    ChestPain,
    ShortnessOfBreath,
    Fatigue,
    Dizziness,
    Thirst,
    FrequentUrination,
    Palpitations,
    Swelling,
    Pale,
    Nausea,
    Headache,
}

impl SymptomTag {
    /// Returns all symptom tags in lexicon scan order.
    pub fn all() -> &'static [SymptomTag] {
        &[
            SymptomTag::ChestPain,
            SymptomTag::ShortnessOfBreath,
            SymptomTag::Fatigue,
            SymptomTag::Dizziness,
            SymptomTag::Thirst,
            SymptomTag::FrequentUrination,
            SymptomTag::Palpitations,
            SymptomTag::Swelling,
            SymptomTag::Pale,
            SymptomTag::Nausea,
            SymptomTag::Headache,
        ]
    }

    /// Returns the canonical snake_case label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            SymptomTag::ChestPain => "chest_pain",
            SymptomTag::ShortnessOfBreath => "shortness_of_breath",
            SymptomTag::Fatigue => "fatigue",
            SymptomTag::Dizziness => "dizziness",
            SymptomTag::Thirst => "thirst",
            SymptomTag::FrequentUrination => "frequent_urination",
            SymptomTag::Palpitations => "palpitations",
            SymptomTag::Swelling => "swelling",
            SymptomTag::Pale => "pale",
            SymptomTag::Nausea => "nausea",
            SymptomTag::Headache => "headache",
        }
    }
}

impl fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
