//! Missing-value completion for the classifier's required parameter set.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::foundation::{Demographics, Parameter, Sex};

use super::implication::ImplicationCandidate;
use super::random::RandomSource;

/// Jitter band applied to symptom-implied estimates.
const IMPLIED_JITTER: (f64, f64) = (0.9, 1.1);

/// Jitter band applied to population-default estimates. Tighter than the
/// implied band: defaults carry more confidence than symptom guesses.
const DEFAULT_JITTER: (f64, f64) = (0.95, 1.05);

/// Population-healthy default for a required parameter.
fn healthy_default(parameter: Parameter) -> f64 {
    match parameter {
        Parameter::Glucose => 95.0,
        Parameter::Insulin => 12.0,
        Parameter::HbA1c => 5.0,
        Parameter::Bmi => 22.0,
        Parameter::Hemoglobin => 14.5,
        Parameter::Platelets => 250_000.0,
        Parameter::WhiteBloodCells => 7_000.0,
        Parameter::RedBloodCells => 4.8,
        Parameter::Hematocrit => 42.0,
        Parameter::MeanCorpuscularVolume => 90.0,
        Parameter::MeanCorpuscularHemoglobin => 30.0,
        Parameter::MeanCorpuscularHemoglobinConcentration => 33.0,
        Parameter::SystolicBloodPressure => 115.0,
        Parameter::DiastolicBloodPressure => 75.0,
        Parameter::HeartRate => 72.0,
        Parameter::Cholesterol => 170.0,
        Parameter::Triglycerides => 100.0,
        Parameter::LdlCholesterol => 100.0,
        Parameter::HdlCholesterol => 50.0,
        Parameter::Alt => 25.0,
        Parameter::Ast => 25.0,
        Parameter::Creatinine => 0.9,
        Parameter::Troponin => 0.01,
        Parameter::CReactiveProtein => 1.0,
        // Informational parameters never reach the completer's required loop.
        Parameter::Thyroid | Parameter::Potassium | Parameter::Albumin => 0.0,
    }
}

/// Applies the known demographic exceptions to a default.
fn adjusted_default(parameter: Parameter, demographics: &Demographics) -> f64 {
    match (parameter, demographics.sex) {
        (Parameter::Hemoglobin, Some(Sex::Female)) => 13.5,
        (Parameter::Creatinine, Some(Sex::Female)) => 0.7,
        _ => healthy_default(parameter),
    }
}

/// Fills in every classifier-required parameter the user did not supply.
///
/// Resolution order per parameter: explicit value verbatim, then the
/// highest-severity implication candidate jittered by ±10%, then the
/// demographic-adjusted healthy default jittered by ±5%.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCompleter;

impl ValueCompleter {
    /// Creates a new completer.
    pub fn new() -> Self {
        Self
    }

    /// Produces a value for every required parameter.
    ///
    /// Explicit values are never overridden by inference. Estimates are
    /// drawn fresh on every call.
    pub fn complete(
        &self,
        explicit: &BTreeMap<Parameter, f64>,
        implied: &BTreeMap<Parameter, Vec<ImplicationCandidate>>,
        demographics: &Demographics,
        rng: &dyn RandomSource,
    ) -> BTreeMap<Parameter, f64> {
        let mut completed = explicit.clone();

        for parameter in Parameter::REQUIRED {
            if completed.contains_key(parameter) {
                continue;
            }

            let value = match implied.get(parameter).and_then(|c| Self::strongest(c)) {
                Some(base) => {
                    let estimate = base * rng.uniform(IMPLIED_JITTER.0, IMPLIED_JITTER.1);
                    debug!(parameter = %parameter, base, estimate, "estimated from symptom implication");
                    estimate
                }
                None => {
                    let base = adjusted_default(*parameter, demographics);
                    base * rng.uniform(DEFAULT_JITTER.0, DEFAULT_JITTER.1)
                }
            };

            completed.insert(*parameter, value);
        }

        completed
    }

    /// Selects the base value of the highest-severity candidate.
    ///
    /// Ties keep the first-seen candidate; candidates without a base value
    /// are skipped.
    fn strongest(candidates: &[ImplicationCandidate]) -> Option<f64> {
        let mut best: Option<&ImplicationCandidate> = None;

        for candidate in candidates {
            if candidate.value.is_none() {
                continue;
            }
            match best {
                Some(current) if candidate.severity <= current.severity => {}
                _ => best = Some(candidate),
            }
        }

        best.and_then(|c| c.value)
    }
}
