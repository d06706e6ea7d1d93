//! Cardiac risk override - a hard safety rule layered on the raw prediction.

use tracing::warn;

use crate::domain::foundation::Parameter;

use super::features::FeatureVector;

/// Label the override forces.
pub const CARDIAC_LABEL: &str = "Heart Di";

/// Confidence reported whenever the override fires.
pub const OVERRIDE_CONFIDENCE: f64 = 95.0;

/// Risk score at which the override fires.
const OVERRIDE_THRESHOLD: u32 = 60;

/// Threshold checks contributing to the cardiac risk score.
const RISK_RULES: &[(Parameter, f64, u32)] = &[
    (Parameter::Troponin, 0.04, 40),
    (Parameter::CReactiveProtein, 3.0, 20),
    (Parameter::LdlCholesterol, 160.0, 15),
    (Parameter::SystolicBloodPressure, 140.0, 15),
];

/// Final label decision after the override check.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub label: String,
    pub confidence: f64,
    pub overridden: bool,
}

/// Deterministic cardiac safety override.
///
/// Applies even when the triggering values were estimated rather than
/// user-supplied: the rule is intentionally biased toward false positives.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardiacOverride;

impl CardiacOverride {
    /// Creates a new override rule set.
    pub fn new() -> Self {
        Self
    }

    /// Accumulates the cardiac risk score from the four threshold checks.
    ///
    /// A parameter absent from the vector contributes nothing.
    pub fn risk_score(&self, features: &FeatureVector) -> u32 {
        RISK_RULES
            .iter()
            .filter(|(parameter, threshold, _)| {
                features.get(*parameter).unwrap_or(0.0) > *threshold
            })
            .map(|(_, _, points)| points)
            .sum()
    }

    /// Applies the override to a raw prediction.
    ///
    /// Forces the cardiac label at fixed confidence when the score reaches
    /// the threshold and the raw label is not already cardiac.
    pub fn apply(
        &self,
        features: &FeatureVector,
        raw_label: &str,
        raw_confidence: f64,
    ) -> RiskAssessment {
        let score = self.risk_score(features);

        if score >= OVERRIDE_THRESHOLD && raw_label != CARDIAC_LABEL {
            warn!(
                score,
                raw_label, "cardiac risk override fired, forcing cardiac label"
            );
            return RiskAssessment {
                label: CARDIAC_LABEL.to_string(),
                confidence: OVERRIDE_CONFIDENCE,
                overridden: true,
            };
        }

        RiskAssessment {
            label: raw_label.to_string(),
            confidence: raw_confidence,
            overridden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inference::features::FeatureDeriver;
    use std::collections::BTreeMap;

    fn features(pairs: &[(Parameter, f64)]) -> FeatureVector {
        let completed: BTreeMap<Parameter, f64> = pairs.iter().copied().collect();
        FeatureDeriver::new().derive(completed)
    }

    #[test]
    fn score_accumulates_all_four_rules() {
        let vector = features(&[
            (Parameter::Troponin, 0.09),
            (Parameter::CReactiveProtein, 8.5),
            (Parameter::LdlCholesterol, 180.0),
            (Parameter::SystolicBloodPressure, 148.0),
        ]);
        assert_eq!(CardiacOverride::new().risk_score(&vector), 90);
    }

    #[test]
    fn boundary_values_do_not_score() {
        // Thresholds are strict: equality contributes nothing.
        let vector = features(&[
            (Parameter::Troponin, 0.04),
            (Parameter::CReactiveProtein, 3.0),
            (Parameter::LdlCholesterol, 160.0),
            (Parameter::SystolicBloodPressure, 140.0),
        ]);
        assert_eq!(CardiacOverride::new().risk_score(&vector), 0);
    }

    #[test]
    fn override_fires_at_exactly_60() {
        // Troponin 0.09 (40) + CRP 8.5 (20); LDL at 160 adds nothing.
        let vector = features(&[
            (Parameter::Troponin, 0.09),
            (Parameter::CReactiveProtein, 8.5),
            (Parameter::LdlCholesterol, 160.0),
        ]);

        let assessment = CardiacOverride::new().apply(&vector, "Healthy", 88.2);
        assert!(assessment.overridden);
        assert_eq!(assessment.label, CARDIAC_LABEL);
        assert_eq!(assessment.confidence, 95.0);
    }

    #[test]
    fn no_override_below_threshold() {
        let vector = features(&[(Parameter::Troponin, 0.03)]);

        let assessment = CardiacOverride::new().apply(&vector, "Healthy", 72.5);
        assert!(!assessment.overridden);
        assert_eq!(assessment.label, "Healthy");
        assert_eq!(assessment.confidence, 72.5);
    }

    #[test]
    fn cardiac_raw_label_is_not_reflagged() {
        let vector = features(&[
            (Parameter::Troponin, 0.09),
            (Parameter::CReactiveProtein, 8.5),
        ]);

        let assessment = CardiacOverride::new().apply(&vector, CARDIAC_LABEL, 64.0);
        assert!(!assessment.overridden);
        assert_eq!(assessment.confidence, 64.0);
    }

    #[test]
    fn override_ignores_classifier_confidence() {
        let vector = features(&[
            (Parameter::Troponin, 0.2),
            (Parameter::CReactiveProtein, 12.0),
            (Parameter::SystolicBloodPressure, 165.0),
        ]);

        let assessment = CardiacOverride::new().apply(&vector, "Diabetes", 99.9);
        assert!(assessment.overridden);
        assert_eq!(assessment.confidence, 95.0);
    }
}
