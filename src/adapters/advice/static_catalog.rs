//! Built-in advice catalog with substring fallback.

use once_cell::sync::Lazy;

use crate::ports::{AdviceCatalog, AdviceRecord};

/// Label used for the guaranteed-present generic record.
const HEALTHY_LABEL: &str = "Healthy";

fn record(
    description: &str,
    immediate_actions: &[&str],
    lifestyle: &[&str],
    diet: &[&str],
) -> AdviceRecord {
    AdviceRecord {
        description: description.to_string(),
        immediate_actions: immediate_actions.iter().map(|s| s.to_string()).collect(),
        lifestyle: lifestyle.iter().map(|s| s.to_string()).collect(),
        diet: diet.iter().map(|s| s.to_string()).collect(),
    }
}

static CATALOG: Lazy<Vec<(&'static str, AdviceRecord)>> = Lazy::new(|| {
    vec![
        (
            "Diabetes",
            record(
                "A metabolic disorder characterized by high blood sugar levels.",
                &[
                    "Monitor blood glucose levels daily",
                    "Consult an endocrinologist",
                ],
                &[
                    "Adopt a low-glycemic index diet",
                    "Engage in regular physical activity (150 mins/week)",
                    "Maintain a healthy weight",
                ],
                &[
                    "Reduce intake of sugary drinks and refined carbs",
                    "Increase fiber intake (vegetables, whole grains)",
                    "Control portion sizes",
                ],
            ),
        ),
        (
            "Heart Di",
            record(
                "Conditions affecting the heart structure and function.",
                &[
                    "Consult a cardiologist immediately",
                    "Monitor blood pressure daily",
                ],
                &[
                    "Quit smoking if applicable",
                    "Manage stress levels",
                    "Aim for 30 minutes of moderate exercise daily",
                ],
                &[
                    "Adopt a Mediterranean-style diet",
                    "Limit sodium intake (<2300mg/day)",
                    "Reduce saturated and trans fats",
                ],
            ),
        ),
        (
            "Anemia",
            record(
                "A condition where you lack enough healthy red blood cells to carry adequate oxygen.",
                &[
                    "Consult a doctor for blood work",
                    "Check for underlying causes",
                ],
                &[
                    "Ensure adequate rest",
                    "Avoid tea/coffee with meals (inhibits iron absorption)",
                ],
                &[
                    "Increase iron-rich foods (spinach, red meat, lentils)",
                    "Consume Vitamin C to enhance iron absorption",
                    "Consider iron supplements if prescribed",
                ],
            ),
        ),
        (
            "Thalasse",
            record(
                "An inherited blood disorder affecting hemoglobin production.",
                &["Genetic counseling", "Regular hematologist check-ups"],
                &[
                    "Avoid iron supplements unless prescribed (risk of overload)",
                    "Protect against infections",
                ],
                &[
                    "Drink tea with meals to reduce iron absorption",
                    "Ensure adequate folate intake",
                ],
            ),
        ),
        (
            "Thromboc",
            record(
                "A condition characterized by low platelet count.",
                &[
                    "Avoid activities with risk of injury/bleeding",
                    "Review medications with doctor",
                ],
                &[
                    "Use soft toothbrush",
                    "Avoid alcohol (can slow platelet production)",
                ],
                &[
                    "Eat plenty of leafy greens",
                    "Avoid quinine-containing foods (tonic water)",
                ],
            ),
        ),
        (
            HEALTHY_LABEL,
            record(
                "Your parameters appear to be within normal ranges.",
                &["Continue regular check-ups"],
                &[
                    "Maintain current healthy habits",
                    "Stay hydrated",
                    "Get 7-9 hours of sleep",
                ],
                &[
                    "Balanced diet with variety of nutrients",
                    "Limit processed foods",
                ],
            ),
        ),
    ]
});

/// In-memory advice catalog.
///
/// Lookup chain: exact label, then bidirectional substring match against
/// known labels, then the generic healthy record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAdviceCatalog;

impl StaticAdviceCatalog {
    /// Creates a new catalog.
    pub fn new() -> Self {
        Self
    }

    fn healthy() -> AdviceRecord {
        CATALOG
            .iter()
            .find(|(label, _)| *label == HEALTHY_LABEL)
            .map(|(_, record)| record.clone())
            .expect("healthy record is always present")
    }
}

impl AdviceCatalog for StaticAdviceCatalog {
    fn advice_for(&self, label: &str) -> AdviceRecord {
        if let Some((_, record)) = CATALOG.iter().find(|(known, _)| *known == label) {
            return record.clone();
        }

        // Partial match absorbs truncated or extended label spellings.
        if let Some((_, record)) = CATALOG
            .iter()
            .find(|(known, _)| label.contains(known) || known.contains(label))
        {
            return record.clone();
        }

        Self::healthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_label_resolves() {
        let advice = StaticAdviceCatalog::new().advice_for("Diabetes");
        assert!(advice.description.contains("metabolic disorder"));
    }

    #[test]
    fn extended_label_resolves_via_substring() {
        // Stored key "Heart Di" absorbs the longer spelling.
        let advice = StaticAdviceCatalog::new().advice_for("Heart Dise");
        assert!(advice.immediate_actions[0].contains("cardiologist"));
    }

    #[test]
    fn truncated_label_resolves_via_substring() {
        let advice = StaticAdviceCatalog::new().advice_for("Anem");
        assert!(advice.description.contains("red blood cells"));
    }

    #[test]
    fn unknown_label_falls_back_to_healthy() {
        let advice = StaticAdviceCatalog::new().advice_for("Gout");
        assert!(advice.description.contains("normal ranges"));
    }

    #[test]
    fn every_record_is_fully_populated() {
        for (label, record) in CATALOG.iter() {
            assert!(!record.description.is_empty(), "{label}");
            assert!(!record.immediate_actions.is_empty(), "{label}");
            assert!(!record.lifestyle.is_empty(), "{label}");
            assert!(!record.diet.is_empty(), "{label}");
        }
    }
}
