//! Session context accumulated across conversation turns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::extraction::Extraction;
use crate::domain::foundation::{ConversationId, Demographics, Parameter, SymptomTag};

/// Everything learned so far in one conversation.
///
/// Owned entirely by the caller: created on the first turn, merged on every
/// turn, discarded when the conversation ends. The core never persists it
/// and never shares it between conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Conversation identifier, for log correlation only.
    pub id: ConversationId,
    /// Accumulated parameter values; a new extraction overwrites the
    /// same-named prior value.
    pub values: BTreeMap<Parameter, f64>,
    /// Accumulated symptom tags in order of first appearance, no duplicates.
    pub symptoms: Vec<SymptomTag>,
    /// Accumulated demographic hints.
    pub demographics: Demographics,
}

impl SessionContext {
    /// Creates an empty context for a new conversation.
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            values: BTreeMap::new(),
            symptoms: Vec::new(),
            demographics: Demographics::default(),
        }
    }

    /// Merges one turn's extraction into the accumulated state.
    ///
    /// Value merge is last-write-wins per parameter; symptom merge is
    /// append-unique preserving first-seen order; demographics merge is
    /// field-wise with the newest hint winning.
    pub fn merge(&mut self, extraction: &Extraction) {
        for (parameter, value) in &extraction.values {
            self.values.insert(*parameter, *value);
        }

        for tag in &extraction.symptoms {
            if !self.symptoms.contains(tag) {
                self.symptoms.push(*tag);
            }
        }

        self.demographics.merge(extraction.demographics);
    }

    /// Count of accumulated distinct data, values plus symptoms.
    pub fn datum_count(&self) -> usize {
        self.values.len() + self.symptoms.len()
    }

    /// True once enough information exists to attempt a prediction.
    ///
    /// A single parameter value or symptom tag is enough; the completer
    /// handles the rest.
    pub fn has_sufficient_information(&self) -> bool {
        self.datum_count() >= 1
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(values: &[(Parameter, f64)], symptoms: &[SymptomTag]) -> Extraction {
        Extraction {
            values: values.iter().copied().collect(),
            symptoms: symptoms.to_vec(),
            demographics: Demographics::default(),
        }
    }

    #[test]
    fn new_context_is_insufficient() {
        let context = SessionContext::new();
        assert_eq!(context.datum_count(), 0);
        assert!(!context.has_sufficient_information());
    }

    #[test]
    fn one_value_is_sufficient() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[(Parameter::Glucose, 120.0)], &[]));
        assert!(context.has_sufficient_information());
    }

    #[test]
    fn one_symptom_is_sufficient() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[], &[SymptomTag::Fatigue]));
        assert!(context.has_sufficient_information());
    }

    #[test]
    fn value_merge_is_last_write_wins() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[(Parameter::Glucose, 120.0)], &[]));
        context.merge(&extraction(&[(Parameter::Glucose, 135.0)], &[]));

        assert_eq!(context.values[&Parameter::Glucose], 135.0);
        assert_eq!(context.values.len(), 1);
    }

    #[test]
    fn symptom_merge_deduplicates_and_preserves_order() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[], &[SymptomTag::Fatigue, SymptomTag::Dizziness]));
        context.merge(&extraction(&[], &[SymptomTag::Dizziness, SymptomTag::ChestPain]));

        assert_eq!(
            context.symptoms,
            vec![SymptomTag::Fatigue, SymptomTag::Dizziness, SymptomTag::ChestPain]
        );
    }

    #[test]
    fn merges_accumulate_across_turns() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[(Parameter::Glucose, 120.0)], &[SymptomTag::Thirst]));
        context.merge(&extraction(&[(Parameter::HbA1c, 6.9)], &[]));

        assert_eq!(context.datum_count(), 3);
    }

    #[test]
    fn demographics_merge_field_wise() {
        let mut context = SessionContext::new();

        let mut first = extraction(&[], &[]);
        first.demographics.age = Some(48);
        context.merge(&first);

        let mut second = extraction(&[], &[]);
        second.demographics.sex = Some(crate::domain::foundation::Sex::Female);
        context.merge(&second);

        assert_eq!(context.demographics.age, Some(48));
        assert_eq!(
            context.demographics.sex,
            Some(crate::domain::foundation::Sex::Female)
        );
    }

    #[test]
    fn context_round_trips_through_json() {
        let mut context = SessionContext::new();
        context.merge(&extraction(&[(Parameter::Troponin, 0.09)], &[SymptomTag::ChestPain]));

        let json = serde_json::to_string(&context).unwrap();
        let restored: SessionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(context, restored);
    }
}
