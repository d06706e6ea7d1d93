//! Triage engine - sequences extraction, inference, classification, and
//! rendering across conversation turns.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::adapters::advice::StaticAdviceCatalog;
use crate::adapters::model::ModelBundle;
use crate::adapters::rng::ThreadRngSource;
use crate::domain::conversation::SessionContext;
use crate::domain::extraction::Extractor;
use crate::domain::inference::{
    CardiacOverride, FeatureDeriver, FeatureOrderError, FeatureVector, RandomSource,
    SymptomInferencer, ValueCompleter,
};
use crate::ports::{AdviceCatalog, AdviceRecord, Classifier, FeatureScaler, LabelDecoder, ModelError};

use super::render;

/// The loaded model collaborators.
pub struct ModelHandles {
    pub classifier: Box<dyn Classifier>,
    pub scaler: Box<dyn FeatureScaler>,
    pub decoder: Box<dyn LabelDecoder>,
}

impl ModelHandles {
    /// Boxes a set of port implementations.
    pub fn new(
        classifier: impl Classifier + 'static,
        scaler: impl FeatureScaler + 'static,
        decoder: impl LabelDecoder + 'static,
    ) -> Self {
        Self {
            classifier: Box::new(classifier),
            scaler: Box::new(scaler),
            decoder: Box::new(decoder),
        }
    }
}

/// Model availability, checked before the pipeline runs.
///
/// `Unavailable` is a degraded-but-alive mode: every turn short-circuits to
/// a fixed apology without attempting inference.
pub enum ModelState {
    Ready(ModelHandles),
    Unavailable,
}

/// Final outcome of one prediction-ready turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted (possibly overridden) disease label.
    pub disease: String,
    /// Confidence percentage.
    pub confidence: f64,
    /// True if the cardiac safety override forced the label.
    pub overridden: bool,
    /// Advice looked up for the final label.
    pub advice: AdviceRecord,
}

/// Result of one conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    /// Natural-language reply to show the user.
    pub text: String,
    /// Merged accumulated state for the caller to persist and pass into the
    /// next turn.
    pub context: SessionContext,
    /// Present only in the prediction-ready state.
    pub prediction: Option<PredictionResult>,
}

/// Faults caught at the turn boundary.
#[derive(Debug, Error)]
enum TurnFault {
    #[error(transparent)]
    Ordering(#[from] FeatureOrderError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Conversation orchestrator over the triage pipeline.
///
/// The engine itself is stateless across turns; all persistence lives in
/// the caller-owned `SessionContext`.
pub struct TriageEngine {
    model: ModelState,
    advice: Box<dyn AdviceCatalog>,
    rng: Box<dyn RandomSource>,
    extractor: Extractor,
    inferencer: SymptomInferencer,
    completer: ValueCompleter,
    deriver: FeatureDeriver,
    cardiac: CardiacOverride,
}

impl TriageEngine {
    /// Creates an engine over explicit collaborators.
    pub fn new(
        model: ModelState,
        advice: Box<dyn AdviceCatalog>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            model,
            advice,
            rng,
            extractor: Extractor::new(),
            inferencer: SymptomInferencer::new(),
            completer: ValueCompleter::new(),
            deriver: FeatureDeriver::new(),
            cardiac: CardiacOverride::new(),
        }
    }

    /// Creates an engine from a model artifact directory, with the built-in
    /// advice catalog and unseeded jitter source.
    ///
    /// A load failure leaves the engine alive in degraded mode.
    pub fn from_artifact_dir(dir: &Path) -> Self {
        let model = match ModelBundle::load(dir) {
            Ok(bundle) => {
                let (classifier, scaler, decoder) = bundle.into_handles();
                ModelState::Ready(ModelHandles::new(classifier, scaler, decoder))
            }
            Err(err) => {
                error!(error = %err, dir = %dir.display(), "failed to load model artifacts, running degraded");
                ModelState::Unavailable
            }
        };

        Self::new(
            model,
            Box::new(StaticAdviceCatalog::new()),
            Box::new(ThreadRngSource::new()),
        )
    }

    /// Returns true if the model collaborators loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self.model, ModelState::Ready(_))
    }

    /// Processes one conversation turn.
    ///
    /// Extracts from the text, merges into the (possibly fresh) context,
    /// then either asks for more information or runs the full pipeline.
    /// Never panics; failures degrade to a user-facing message with the
    /// merged context preserved.
    pub fn process_turn(&self, text: &str, context: Option<SessionContext>) -> TurnResponse {
        let mut context = context.unwrap_or_default();

        let extraction = self.extractor.extract(text);
        debug!(
            conversation = %context.id,
            values = extraction.values.len(),
            symptoms = ?extraction.symptoms,
            "extracted turn input"
        );

        context.merge(&extraction);
        debug!(
            conversation = %context.id,
            accumulated_values = context.values.len(),
            accumulated_symptoms = context.symptoms.len(),
            "merged session context"
        );

        if !context.has_sufficient_information() {
            return TurnResponse {
                text: render::INSUFFICIENT_INFO_MESSAGE.to_string(),
                context,
                prediction: None,
            };
        }

        let handles = match &self.model {
            ModelState::Ready(handles) => handles,
            ModelState::Unavailable => {
                warn!(conversation = %context.id, "model unavailable, returning degraded response");
                return TurnResponse {
                    text: render::MODEL_UNAVAILABLE_MESSAGE.to_string(),
                    context,
                    prediction: None,
                };
            }
        };

        let implied = self.inferencer.infer(&context.symptoms);
        let completed = self.completer.complete(
            &context.values,
            &implied,
            &context.demographics,
            self.rng.as_ref(),
        );
        let features = self.deriver.derive(completed);

        match self.classify(handles, &features) {
            Ok((raw_label, raw_confidence)) => {
                let assessment = self.cardiac.apply(&features, &raw_label, raw_confidence);
                let prediction = PredictionResult {
                    advice: self.advice.advice_for(&assessment.label),
                    disease: assessment.label,
                    confidence: assessment.confidence,
                    overridden: assessment.overridden,
                };

                let text = render::prediction_text(&prediction, &context, &implied);
                TurnResponse {
                    text,
                    context,
                    prediction: Some(prediction),
                }
            }
            Err(fault) => {
                warn!(conversation = %context.id, error = %fault, "turn analysis failed");
                TurnResponse {
                    text: render::ANALYSIS_FAILED_MESSAGE.to_string(),
                    context,
                    prediction: None,
                }
            }
        }
    }

    /// Reindexes, scales, predicts, and decodes one feature vector.
    fn classify(
        &self,
        handles: &ModelHandles,
        features: &FeatureVector,
    ) -> Result<(String, f64), TurnFault> {
        let ordered = features.ordered_by(handles.classifier.feature_names())?;
        let scaled = handles.scaler.scale(&ordered)?;
        let raw = handles.classifier.predict(&scaled)?;
        let label = handles.decoder.decode(raw.label_index)?;
        Ok((label, raw.confidence_percent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rng::FixedSource;
    use crate::domain::foundation::{Parameter, SymptomTag};
    use crate::ports::RawPrediction;

    /// Classifier stub returning a fixed class over the standard vocabulary.
    struct StubClassifier {
        names: Vec<String>,
        label_index: usize,
        probabilities: Vec<f64>,
    }

    impl StubClassifier {
        fn predicting(label_index: usize, probabilities: Vec<f64>) -> Self {
            let mut names: Vec<String> = Parameter::REQUIRED
                .iter()
                .map(|p| p.canonical_name().to_string())
                .collect();
            names.extend(
                crate::domain::inference::DerivedFeature::all()
                    .iter()
                    .map(|d| d.canonical_name().to_string()),
            );
            Self { names, label_index, probabilities }
        }

        fn with_names(names: Vec<String>) -> Self {
            Self { names, label_index: 0, probabilities: vec![1.0] }
        }
    }

    impl Classifier for StubClassifier {
        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict(&self, scaled: &[f64]) -> Result<RawPrediction, ModelError> {
            if scaled.len() != self.names.len() {
                return Err(ModelError::FeatureCount {
                    expected: self.names.len(),
                    actual: scaled.len(),
                });
            }
            Ok(RawPrediction {
                label_index: self.label_index,
                probabilities: self.probabilities.clone(),
            })
        }
    }

    struct PassthroughScaler;

    impl FeatureScaler for PassthroughScaler {
        fn scale(&self, raw: &[f64]) -> Result<Vec<f64>, ModelError> {
            Ok(raw.to_vec())
        }
    }

    struct StubDecoder(Vec<&'static str>);

    impl LabelDecoder for StubDecoder {
        fn decode(&self, index: usize) -> Result<String, ModelError> {
            self.0
                .get(index)
                .map(|s| s.to_string())
                .ok_or(ModelError::UnknownLabel(index))
        }
    }

    fn ready_engine(classifier: StubClassifier, labels: Vec<&'static str>) -> TriageEngine {
        TriageEngine::new(
            ModelState::Ready(ModelHandles::new(classifier, PassthroughScaler, StubDecoder(labels))),
            Box::new(StaticAdviceCatalog::new()),
            Box::new(FixedSource(1.0)),
        )
    }

    fn healthy_engine() -> TriageEngine {
        ready_engine(
            StubClassifier::predicting(0, vec![0.8, 0.2]),
            vec!["Healthy", "Diabetes"],
        )
    }

    #[test]
    fn empty_turn_requests_more_information() {
        let response = healthy_engine().process_turn("hello there", None);

        assert_eq!(response.text, render::INSUFFICIENT_INFO_MESSAGE);
        assert!(response.prediction.is_none());
        assert_eq!(response.context.datum_count(), 0);
    }

    #[test]
    fn single_value_triggers_a_prediction() {
        let response = healthy_engine().process_turn("my glucose is 120", None);

        let prediction = response.prediction.expect("should predict");
        assert_eq!(prediction.disease, "Healthy");
        assert!((prediction.confidence - 80.0).abs() < 1e-9);
        assert!(!prediction.overridden);
    }

    #[test]
    fn single_symptom_triggers_a_prediction() {
        let response = healthy_engine().process_turn("I feel dizzy", None);

        assert!(response.prediction.is_some());
        assert_eq!(response.context.symptoms, vec![SymptomTag::Dizziness]);
    }

    #[test]
    fn unavailable_model_returns_apology_but_merges_context() {
        let engine = TriageEngine::new(
            ModelState::Unavailable,
            Box::new(StaticAdviceCatalog::new()),
            Box::new(FixedSource(1.0)),
        );

        let response = engine.process_turn("my glucose is 120", None);
        assert_eq!(response.text, render::MODEL_UNAVAILABLE_MESSAGE);
        assert!(response.prediction.is_none());
        assert_eq!(response.context.values[&Parameter::Glucose], 120.0);
    }

    #[test]
    fn cardiac_override_forces_label_and_confidence() {
        // The classifier insists on Healthy, but the explicit markers score
        // 40 + 20 + 15 + 15.
        let response = healthy_engine().process_turn(
            "troponin is 0.09, crp 8.5, ldl 180 and systolic 148",
            None,
        );

        let prediction = response.prediction.expect("should predict");
        assert!(prediction.overridden);
        assert_eq!(prediction.disease, "Heart Di");
        assert_eq!(prediction.confidence, 95.0);
        assert!(prediction.advice.immediate_actions[0].contains("cardiologist"));
    }

    #[test]
    fn estimated_values_can_fire_the_override() {
        // No explicit values at all: chest pain implies troponin 0.08 and
        // CRP 5.0, enough to reach the threshold even as estimates.
        let response = healthy_engine().process_turn("I have chest pain", None);

        let prediction = response.prediction.expect("should predict");
        assert!(prediction.overridden);
        assert_eq!(prediction.disease, "Heart Di");
    }

    #[test]
    fn feature_ordering_mismatch_fails_the_turn_not_the_process() {
        let engine = ready_engine(
            StubClassifier::with_names(vec!["Ferritin".to_string()]),
            vec!["Healthy"],
        );

        let response = engine.process_turn("glucose is 120", None);
        assert_eq!(response.text, render::ANALYSIS_FAILED_MESSAGE);
        assert!(response.prediction.is_none());
        // Context survives for a retry.
        assert_eq!(response.context.values[&Parameter::Glucose], 120.0);
    }

    #[test]
    fn context_accumulates_across_turns() {
        let engine = healthy_engine();

        let first = engine.process_turn("glucose is 120", None);
        let second = engine.process_turn("feeling thirsty", Some(first.context));

        assert_eq!(second.context.values[&Parameter::Glucose], 120.0);
        assert_eq!(second.context.symptoms, vec![SymptomTag::Thirst]);
        assert_eq!(second.context.datum_count(), 2);
    }

    #[test]
    fn rendered_text_mentions_prediction_and_indicators() {
        let response = healthy_engine().process_turn("glucose is 120", None);

        assert!(response.text.contains("**Healthy**"));
        assert!(response.text.contains("Confidence: 80.0%"));
        assert!(response.text.contains("- Glucose: 120"));
    }

    #[test]
    fn unknown_decoded_label_still_yields_advice() {
        let engine = ready_engine(
            StubClassifier::predicting(0, vec![0.9]),
            vec!["Heart Dise"],
        );

        let response = engine.process_turn("glucose is 120", None);
        let prediction = response.prediction.expect("should predict");
        // Substring fallback resolves the near-miss spelling.
        assert!(prediction.advice.immediate_actions[0].contains("cardiologist"));
    }
}
