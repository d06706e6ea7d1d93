//! Parameter enum - the closed set of clinical quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named clinical lab or vital measurement.
///
/// The first 24 variants are the features the classifier consumes; the
/// remaining three (Thyroid, Potassium, Albumin) are referenced only by the
/// symptom-implication map and are carried through as informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Glucose,
    Cholesterol,
    Bmi,
    HbA1c,
    Insulin,
    Hemoglobin,
    Platelets,
    WhiteBloodCells,
    RedBloodCells,
    Hematocrit,
    MeanCorpuscularVolume,
    MeanCorpuscularHemoglobin,
    MeanCorpuscularHemoglobinConcentration,
    SystolicBloodPressure,
    DiastolicBloodPressure,
    HeartRate,
    Troponin,
    CReactiveProtein,
    LdlCholesterol,
    HdlCholesterol,
    Triglycerides,
    Alt,
    Ast,
    Creatinine,
    Thyroid,
    Potassium,
    Albumin,
}

impl Parameter {
    /// The parameters the classifier requires, in canonical order.
    ///
    /// Every one of these must resolve to exactly one numeric value before
    /// inference runs.
    pub const REQUIRED: &'static [Parameter] = &[
        Parameter::Glucose,
        Parameter::Insulin,
        Parameter::HbA1c,
        Parameter::Bmi,
        Parameter::Hemoglobin,
        Parameter::Platelets,
        Parameter::WhiteBloodCells,
        Parameter::RedBloodCells,
        Parameter::Hematocrit,
        Parameter::MeanCorpuscularVolume,
        Parameter::MeanCorpuscularHemoglobin,
        Parameter::MeanCorpuscularHemoglobinConcentration,
        Parameter::SystolicBloodPressure,
        Parameter::DiastolicBloodPressure,
        Parameter::HeartRate,
        Parameter::Cholesterol,
        Parameter::Triglycerides,
        Parameter::LdlCholesterol,
        Parameter::HdlCholesterol,
        Parameter::Alt,
        Parameter::Ast,
        Parameter::Creatinine,
        Parameter::Troponin,
        Parameter::CReactiveProtein,
    ];

    /// Returns true if the classifier requires this parameter.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Returns the canonical name used by the external feature vocabulary.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Parameter::Glucose => "Glucose",
            Parameter::Cholesterol => "Cholesterol",
            Parameter::Bmi => "BMI",
            Parameter::HbA1c => "HbA1c",
            Parameter::Insulin => "Insulin",
            Parameter::Hemoglobin => "Hemoglobin",
            Parameter::Platelets => "Platelets",
            Parameter::WhiteBloodCells => "White Blood Cells",
            Parameter::RedBloodCells => "Red Blood Cells",
            Parameter::Hematocrit => "Hematocrit",
            Parameter::MeanCorpuscularVolume => "Mean Corpuscular Volume",
            Parameter::MeanCorpuscularHemoglobin => "Mean Corpuscular Hemoglobin",
            Parameter::MeanCorpuscularHemoglobinConcentration => {
                "Mean Corpuscular Hemoglobin Concentration"
            }
            Parameter::SystolicBloodPressure => "Systolic Blood Pressure",
            Parameter::DiastolicBloodPressure => "Diastolic Blood Pressure",
            Parameter::HeartRate => "Heart Rate",
            Parameter::Troponin => "Troponin",
            Parameter::CReactiveProtein => "C-reactive Protein",
            Parameter::LdlCholesterol => "LDL Cholesterol",
            Parameter::HdlCholesterol => "HDL Cholesterol",
            Parameter::Triglycerides => "Triglycerides",
            Parameter::Alt => "ALT",
            Parameter::Ast => "AST",
            Parameter::Creatinine => "Creatinine",
            Parameter::Thyroid => "Thyroid",
            Parameter::Potassium => "Potassium",
            Parameter::Albumin => "Albumin",
        }
    }

    /// Resolves a canonical name back to a parameter.
    pub fn from_canonical_name(name: &str) -> Option<Parameter> {
        Self::all().iter().copied().find(|p| p.canonical_name() == name)
    }

    /// Returns every parameter, required and informational.
    pub fn all() -> &'static [Parameter] {
        &[
            Parameter::Glucose,
            Parameter::Cholesterol,
            Parameter::Bmi,
            Parameter::HbA1c,
            Parameter::Insulin,
            Parameter::Hemoglobin,
            Parameter::Platelets,
            Parameter::WhiteBloodCells,
            Parameter::RedBloodCells,
            Parameter::Hematocrit,
            Parameter::MeanCorpuscularVolume,
            Parameter::MeanCorpuscularHemoglobin,
            Parameter::MeanCorpuscularHemoglobinConcentration,
            Parameter::SystolicBloodPressure,
            Parameter::DiastolicBloodPressure,
            Parameter::HeartRate,
            Parameter::Troponin,
            Parameter::CReactiveProtein,
            Parameter::LdlCholesterol,
            Parameter::HdlCholesterol,
            Parameter::Triglycerides,
            Parameter::Alt,
            Parameter::Ast,
            Parameter::Creatinine,
            Parameter::Thyroid,
            Parameter::Potassium,
            Parameter::Albumin,
        ]
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
