//! Response text rendering.

use std::collections::BTreeMap;

use crate::domain::conversation::SessionContext;
use crate::domain::foundation::Parameter;
use crate::domain::inference::ImplicationCandidate;

use super::engine::PredictionResult;

/// Response when the accumulated context is not yet enough to predict.
pub const INSUFFICIENT_INFO_MESSAGE: &str = "I've noted your input. To give you an accurate \
     assessment, could you provide more details? For example, do you have any recent blood test \
     results (like Glucose, Cholesterol, or Hemoglobin) or are you experiencing other symptoms?";

/// Response in degraded mode, when the model artifacts failed to load.
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "I'm sorry, but my medical knowledge base is currently unavailable. Please try again later.";

/// Response when scaling or prediction fails for one turn.
pub const ANALYSIS_FAILED_MESSAGE: &str = "I encountered an error while analyzing your data. \
     Please ensure you've provided valid clinical values.";

/// Renders the full natural-language explanation for a prediction.
pub(super) fn prediction_text(
    prediction: &PredictionResult,
    context: &SessionContext,
    implied: &BTreeMap<Parameter, Vec<ImplicationCandidate>>,
) -> String {
    let symptom_list = if context.symptoms.is_empty() {
        "reported symptoms".to_string()
    } else {
        context
            .symptoms
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut text = format!(
        "Based on your {symptom_list} and the clinical values provided (or estimated), \
         my assessment points to **{}** (Confidence: {:.1}%).\n\n",
        prediction.disease, prediction.confidence
    );

    text.push_str(&format!("**Analysis:**\n{}\n\n", prediction.advice.description));

    text.push_str("**Key Indicators:**\n");
    for (parameter, value) in &context.values {
        text.push_str(&format!("- {parameter}: {value}\n"));
    }
    if !implied.is_empty() {
        let inferred = implied
            .keys()
            .map(|parameter| parameter.canonical_name())
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!("- (Inferred from symptoms: {inferred})\n"));
    }

    text.push_str("\n**Recommended Actions:**\n");
    for action in &prediction.advice.immediate_actions {
        text.push_str(&format!("- {action}\n"));
    }

    text.push_str("\n**Prevention & Lifestyle:**\n");
    for tip in &prediction.advice.lifestyle {
        text.push_str(&format!("- {tip}\n"));
    }

    text
}
