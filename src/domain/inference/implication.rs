//! Symptom-to-parameter implication mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Parameter, Severity, SymptomTag};

/// Expected deviation direction of an implied parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    High,
    Low,
    Abnormal,
}

/// A symptom-derived guess at a parameter's abnormal value.
///
/// The base value is absent for parameters the mapping flags without
/// quantifying (Thyroid); such candidates are informational only and the
/// completer never selects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImplicationCandidate {
    pub direction: Direction,
    pub value: Option<f64>,
    pub severity: Severity,
}

impl ImplicationCandidate {
    fn new(direction: Direction, value: Option<f64>, severity: u8) -> Self {
        Self {
            direction,
            value,
            severity: Severity::new(severity),
        }
    }
}

fn high(value: f64, severity: u8) -> ImplicationCandidate {
    ImplicationCandidate::new(Direction::High, Some(value), severity)
}

fn low(value: f64, severity: u8) -> ImplicationCandidate {
    ImplicationCandidate::new(Direction::Low, Some(value), severity)
}

fn abnormal(severity: u8) -> ImplicationCandidate {
    ImplicationCandidate::new(Direction::Abnormal, None, severity)
}

/// Implication entries for one symptom tag.
///
/// Tags with no known mapping (nausea, headache) return an empty slice and
/// are ignored silently. Parameters outside the classifier's feature set
/// (Thyroid, Potassium, Albumin) are legitimately present here; they are
/// informational, not fatal.
fn entries(tag: SymptomTag) -> Vec<(Parameter, ImplicationCandidate)> {
    match tag {
        SymptomTag::ChestPain => vec![
            (Parameter::Troponin, high(0.08, 10)),
            (Parameter::CReactiveProtein, high(5.0, 8)),
            (Parameter::Cholesterol, high(240.0, 6)),
            (Parameter::LdlCholesterol, high(160.0, 6)),
            (Parameter::SystolicBloodPressure, high(150.0, 7)),
        ],
        SymptomTag::ShortnessOfBreath => vec![
            (Parameter::Hemoglobin, low(10.0, 8)),
            (Parameter::RedBloodCells, low(3.5, 7)),
            (Parameter::HeartRate, high(110.0, 6)),
            (Parameter::Troponin, high(0.05, 9)),
        ],
        SymptomTag::Fatigue => vec![
            (Parameter::Hemoglobin, low(11.0, 7)),
            (Parameter::Glucose, high(160.0, 6)),
            (Parameter::HbA1c, high(6.5, 5)),
            (Parameter::Thyroid, abnormal(4)),
        ],
        SymptomTag::Thirst => vec![
            (Parameter::Glucose, high(200.0, 9)),
            (Parameter::HbA1c, high(7.5, 8)),
            (Parameter::Insulin, high(20.0, 6)),
        ],
        SymptomTag::FrequentUrination => vec![
            (Parameter::Glucose, high(190.0, 9)),
            (Parameter::HbA1c, high(7.2, 8)),
            (Parameter::Creatinine, high(1.3, 6)),
        ],
        SymptomTag::Dizziness => vec![
            (Parameter::SystolicBloodPressure, low(90.0, 7)),
            (Parameter::Hemoglobin, low(10.5, 6)),
            (Parameter::Glucose, low(60.0, 8)),
        ],
        SymptomTag::Palpitations => vec![
            (Parameter::HeartRate, high(120.0, 8)),
            (Parameter::Potassium, low(3.0, 7)),
            (Parameter::Hemoglobin, low(10.0, 6)),
        ],
        SymptomTag::Pale => vec![
            (Parameter::Hemoglobin, low(9.0, 9)),
            (Parameter::RedBloodCells, low(3.2, 8)),
            (Parameter::Hematocrit, low(30.0, 8)),
        ],
        SymptomTag::Swelling => vec![
            (Parameter::Creatinine, high(1.5, 8)),
            (Parameter::Albumin, low(3.0, 7)),
            (Parameter::HeartRate, high(90.0, 5)),
        ],
        SymptomTag::Nausea | SymptomTag::Headache => Vec::new(),
    }
}

/// Maps symptom tags to implied parameter candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomInferencer;

impl SymptomInferencer {
    /// Creates a new inferencer.
    pub fn new() -> Self {
        Self
    }

    /// Collects every implication candidate for the given symptoms, grouped
    /// by parameter.
    ///
    /// Several symptoms may contribute candidates to the same parameter;
    /// within one parameter, contribution order follows the input symptom
    /// order.
    pub fn infer(
        &self,
        symptoms: &[SymptomTag],
    ) -> BTreeMap<Parameter, Vec<ImplicationCandidate>> {
        let mut implied: BTreeMap<Parameter, Vec<ImplicationCandidate>> = BTreeMap::new();

        for tag in symptoms {
            for (parameter, candidate) in entries(*tag) {
                implied.entry(parameter).or_default().push(candidate);
            }
        }

        implied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pain_implies_five_parameters() {
        let implied = SymptomInferencer::new().infer(&[SymptomTag::ChestPain]);
        assert_eq!(implied.len(), 5);

        let troponin = &implied[&Parameter::Troponin];
        assert_eq!(troponin.len(), 1);
        assert_eq!(troponin[0].direction, Direction::High);
        assert_eq!(troponin[0].value, Some(0.08));
        assert_eq!(troponin[0].severity, Severity::new(10));
    }

    #[test]
    fn unmapped_tags_are_ignored_silently() {
        let inferencer = SymptomInferencer::new();
        assert!(inferencer.infer(&[SymptomTag::Nausea]).is_empty());
        assert!(inferencer.infer(&[SymptomTag::Headache]).is_empty());
    }

    #[test]
    fn several_symptoms_contribute_to_the_same_parameter() {
        let implied =
            SymptomInferencer::new().infer(&[SymptomTag::ChestPain, SymptomTag::ShortnessOfBreath]);

        let troponin = &implied[&Parameter::Troponin];
        assert_eq!(troponin.len(), 2);
        // Contribution order follows input symptom order.
        assert_eq!(troponin[0].value, Some(0.08));
        assert_eq!(troponin[1].value, Some(0.05));
    }

    #[test]
    fn informational_parameters_are_carried_through() {
        let implied = SymptomInferencer::new().infer(&[SymptomTag::Fatigue]);
        let thyroid = &implied[&Parameter::Thyroid];
        assert_eq!(thyroid[0].direction, Direction::Abnormal);
        assert_eq!(thyroid[0].value, None);
    }

    #[test]
    fn empty_symptom_list_implies_nothing() {
        assert!(SymptomInferencer::new().infer(&[]).is_empty());
    }

    #[test]
    fn every_mapped_tag_has_valued_candidates() {
        // Only the Thyroid entry may omit a base value.
        let inferencer = SymptomInferencer::new();
        for tag in SymptomTag::all() {
            for (parameter, candidate) in inferencer
                .infer(&[*tag])
                .into_iter()
                .flat_map(|(p, cs)| cs.into_iter().map(move |c| (p, c)))
            {
                if parameter != Parameter::Thyroid {
                    assert!(candidate.value.is_some(), "{tag}/{parameter} lacks a value");
                }
            }
        }
    }
}
