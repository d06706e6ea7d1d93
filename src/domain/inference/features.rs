//! Feature vector assembly and derived-feature computation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Parameter;

/// Epsilon added to ratio denominators to avoid division by zero.
const EPSILON: f64 = 1e-6;

/// Secondary features computed from the completed parameter vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedFeature {
    LdlHdlRatio,
    CholHdlRatio,
    GlucoseInsulinInteraction,
    MeanArterialPressure,
}

impl DerivedFeature {
    /// Returns all derived features in canonical order.
    pub fn all() -> &'static [DerivedFeature] {
        &[
            DerivedFeature::LdlHdlRatio,
            DerivedFeature::CholHdlRatio,
            DerivedFeature::GlucoseInsulinInteraction,
            DerivedFeature::MeanArterialPressure,
        ]
    }

    /// Returns the canonical name used by the external feature vocabulary.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            DerivedFeature::LdlHdlRatio => "LDL_HDL_Ratio",
            DerivedFeature::CholHdlRatio => "Chol_HDL_Ratio",
            DerivedFeature::GlucoseInsulinInteraction => "Glucose_Insulin_Interaction",
            DerivedFeature::MeanArterialPressure => "MAP",
        }
    }

    /// Resolves a canonical name back to a derived feature.
    pub fn from_canonical_name(name: &str) -> Option<DerivedFeature> {
        Self::all().iter().copied().find(|d| d.canonical_name() == name)
    }
}

impl fmt::Display for DerivedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Error raised when the external feature ordering names an unknown feature.
///
/// Fatal for the turn, not for the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("classifier requested unknown feature '{name}'")]
pub struct FeatureOrderError {
    pub name: String,
}

/// The complete mapping from every feature name to a value.
///
/// Built fresh each turn from the completed parameter map plus derived
/// features; never retained across turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    params: BTreeMap<Parameter, f64>,
    derived: BTreeMap<DerivedFeature, f64>,
}

impl FeatureVector {
    /// Returns a primary parameter value.
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.params.get(&parameter).copied()
    }

    /// Returns a derived feature value.
    pub fn derived(&self, feature: DerivedFeature) -> Option<f64> {
        self.derived.get(&feature).copied()
    }

    /// Resolves a value by canonical feature name, primary or derived.
    pub fn value_of_name(&self, name: &str) -> Option<f64> {
        if let Some(parameter) = Parameter::from_canonical_name(name) {
            return self.get(parameter);
        }
        DerivedFeature::from_canonical_name(name).and_then(|d| self.derived(d))
    }

    /// Reindexes the vector into the externally-supplied feature ordering.
    ///
    /// The classifier consumes features in exactly this order; an unknown or
    /// absent name fails the turn.
    pub fn ordered_by(&self, names: &[String]) -> Result<Vec<f64>, FeatureOrderError> {
        names
            .iter()
            .map(|name| {
                self.value_of_name(name)
                    .ok_or_else(|| FeatureOrderError { name: name.clone() })
            })
            .collect()
    }
}

/// Computes the derived features and assembles the final vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Creates a new deriver.
    pub fn new() -> Self {
        Self
    }

    /// Appends the four derived features to a completed parameter map.
    ///
    /// The arithmetic is fixed; reordering the operations would change the
    /// floating-point results.
    pub fn derive(&self, completed: BTreeMap<Parameter, f64>) -> FeatureVector {
        let value = |p: Parameter| completed.get(&p).copied().unwrap_or(0.0);

        let ldl = value(Parameter::LdlCholesterol);
        let hdl = value(Parameter::HdlCholesterol);
        let cholesterol = value(Parameter::Cholesterol);
        let glucose = value(Parameter::Glucose);
        let insulin = value(Parameter::Insulin);
        let systolic = value(Parameter::SystolicBloodPressure);
        let diastolic = value(Parameter::DiastolicBloodPressure);

        let mut derived = BTreeMap::new();
        derived.insert(DerivedFeature::LdlHdlRatio, ldl / (hdl + EPSILON));
        derived.insert(DerivedFeature::CholHdlRatio, cholesterol / (hdl + EPSILON));
        derived.insert(DerivedFeature::GlucoseInsulinInteraction, glucose * insulin);
        derived.insert(
            DerivedFeature::MeanArterialPressure,
            diastolic + (1.0 / 3.0) * (systolic - diastolic),
        );

        FeatureVector {
            params: completed,
            derived,
        }
    }
}
