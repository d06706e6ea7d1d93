//! Free-text extraction of clinical values, symptoms, and demographics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Demographics, Parameter, Sex, SymptomTag};

use super::lexicon;
use super::patterns::{AGE_PATTERN, VALUE_PATTERNS};

/// Structured data extracted from one message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Parameter values asserted in the text.
    pub values: BTreeMap<Parameter, f64>,
    /// Symptom tags in order of first appearance, each at most once.
    pub symptoms: Vec<SymptomTag>,
    /// Demographic hints, if any.
    pub demographics: Demographics,
}

impl Extraction {
    /// Returns true if the text yielded nothing usable.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.symptoms.is_empty() && self.demographics.is_empty()
    }
}

/// Extracts clinical data from natural-language text.
///
/// Pure function of its input; an unmatched parameter or symptom is simply
/// absent from the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Runs value, symptom, and demographic extraction over one message.
    pub fn extract(&self, text: &str) -> Extraction {
        let lowered = text.to_lowercase();
        Extraction {
            values: self.extract_values(&lowered),
            symptoms: self.extract_symptoms(&lowered),
            demographics: self.extract_demographics(&lowered),
        }
    }

    /// Extracts lab/vital values.
    ///
    /// Alternatives for one parameter are tried in order and the first
    /// parseable match wins; thousands separators are stripped before
    /// parsing.
    fn extract_values(&self, lowered: &str) -> BTreeMap<Parameter, f64> {
        let mut values = BTreeMap::new();

        for entry in VALUE_PATTERNS.iter() {
            for pattern in &entry.alternatives {
                let Some(caps) = pattern.captures(lowered) else {
                    continue;
                };
                let raw = caps[1].replace(',', "");
                if let Ok(value) = raw.parse::<f64>() {
                    values.insert(entry.parameter, value);
                    break;
                }
            }
        }

        values
    }

    /// Extracts symptom tags.
    ///
    /// The first phrase hit adds the tag once and stops checking further
    /// phrases for that tag; scanning continues for the other tags.
    fn extract_symptoms(&self, lowered: &str) -> Vec<SymptomTag> {
        let mut found = Vec::new();

        for tag in SymptomTag::all() {
            if lexicon::phrases(*tag).iter().any(|p| lowered.contains(p)) {
                found.push(*tag);
            }
        }

        found
    }

    /// Extracts age and sex hints.
    ///
    /// Sex resolution precedence: explicit "female" beats "male" when both
    /// appear (note "female" contains "male" as a substring), then explicit
    /// "male", then gendered nouns.
    fn extract_demographics(&self, lowered: &str) -> Demographics {
        let age = AGE_PATTERN
            .captures(lowered)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        let sex = if lowered.contains("male") && !lowered.contains("female") {
            Some(Sex::Male)
        } else if lowered.contains("female") {
            Some(Sex::Female)
        } else if lowered.contains(" man ") || lowered.contains(" boy ") {
            Some(Sex::Male)
        } else if lowered.contains(" woman ") || lowered.contains(" girl ") {
            Some(Sex::Female)
        } else {
            None
        };

        Demographics { age, sex }
    }
}
