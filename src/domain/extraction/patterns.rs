//! Compiled value-extraction patterns, one alternative list per parameter.
//!
//! Patterns are matched against lower-cased input; alternatives for the same
//! parameter are tried in order and the first hit wins. Numeric captures may
//! contain thousands separators, which callers strip before parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Parameter;

/// Ordered pattern alternatives for one parameter.
pub(super) struct ParameterPatterns {
    pub parameter: Parameter,
    pub alternatives: Vec<Regex>,
}

fn entry(parameter: Parameter, alternatives: &[&str]) -> ParameterPatterns {
    ParameterPatterns {
        parameter,
        alternatives: alternatives
            .iter()
            .map(|p| Regex::new(p).expect("value pattern must compile"))
            .collect(),
    }
}

/// All value patterns, in canonical scan order.
pub(super) static VALUE_PATTERNS: Lazy<Vec<ParameterPatterns>> = Lazy::new(|| {
    vec![
        entry(
            Parameter::Glucose,
            &[
                r"glucose(?: level| value)?\s*(?:is|:|=)?\s*(\d+)",
                r"sugar(?: level)?\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Cholesterol,
            &[
                r"cholesterol(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"total cholesterol\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Bmi,
            &[
                r"bmi\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"body mass index\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::HbA1c,
            &[
                r"hba1c(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"a1c\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::Insulin,
            &[r"insulin(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
        entry(
            Parameter::Hemoglobin,
            &[
                r"hemoglobin(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"hb\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::Platelets,
            &[
                r"platelets(?: count)?\s*(?:is|:|=)?\s*(\d+(?:,\d+)?)",
                r"plt\s*(?:is|:|=)?\s*(\d+(?:,\d+)?)",
            ],
        ),
        entry(
            Parameter::WhiteBloodCells,
            &[
                r"white blood cells(?: count)?\s*(?:is|:|=)?\s*(\d+(?:,\d+)?)",
                r"wbc\s*(?:is|:|=)?\s*(\d+(?:,\d+)?)",
            ],
        ),
        entry(
            Parameter::RedBloodCells,
            &[
                r"red blood cells(?: count)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"rbc\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::Hematocrit,
            &[
                r"hematocrit(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"hct\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::MeanCorpuscularVolume,
            &[r"mcv\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
        entry(
            Parameter::MeanCorpuscularHemoglobin,
            &[r"mch\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
        entry(
            Parameter::MeanCorpuscularHemoglobinConcentration,
            &[r"mchc\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
        entry(
            Parameter::SystolicBloodPressure,
            &[
                r"systolic(?: bp)?\s*(?:is|:|=)?\s*(\d+)",
                r"bp(?: is)?\s*(\d+)/\d+",
            ],
        ),
        entry(
            Parameter::DiastolicBloodPressure,
            &[
                r"diastolic(?: bp)?\s*(?:is|:|=)?\s*(\d+)",
                r"bp(?: is)?\s*\d+/(\d+)",
            ],
        ),
        entry(
            Parameter::HeartRate,
            &[
                r"heart rate\s*(?:is|:|=)?\s*(\d+)",
                r"pulse\s*(?:is|:|=)?\s*(\d+)",
                r"bpm\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Troponin,
            &[r"troponin(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
        entry(
            Parameter::CReactiveProtein,
            &[
                r"crp(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
                r"c-reactive protein\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)",
            ],
        ),
        entry(
            Parameter::LdlCholesterol,
            &[
                r"ldl(?: cholesterol)?(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"bad cholesterol\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::HdlCholesterol,
            &[
                r"hdl(?: cholesterol)?(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"good cholesterol\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Triglycerides,
            &[
                r"triglycerides(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"trigs\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Alt,
            &[
                r"alt(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"sgpt\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Ast,
            &[
                r"ast(?: level)?\s*(?:is|:|=)?\s*(\d+)",
                r"sgot\s*(?:is|:|=)?\s*(\d+)",
            ],
        ),
        entry(
            Parameter::Creatinine,
            &[r"creatinine(?: level)?\s*(?:is|:|=)?\s*(\d+(?:\.\d+)?)"],
        ),
    ]
});

/// Age is recognized only as "<integer> years/yrs/yo old".
pub(super) static AGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:years|yrs|yo)\s*old").expect("age pattern must compile"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_extractable_parameter_has_patterns() {
        assert_eq!(VALUE_PATTERNS.len(), 24);
        for entry in VALUE_PATTERNS.iter() {
            assert!(
                !entry.alternatives.is_empty(),
                "{} has no patterns",
                entry.parameter
            );
        }
    }

    #[test]
    fn patterns_cover_each_required_parameter_once() {
        for required in Parameter::REQUIRED {
            let count = VALUE_PATTERNS
                .iter()
                .filter(|e| e.parameter == *required)
                .count();
            assert_eq!(count, 1, "{required} should appear exactly once");
        }
    }

    #[test]
    fn age_pattern_captures_integer() {
        let caps = AGE_PATTERN.captures("she is 45 years old").unwrap();
        assert_eq!(&caps[1], "45");
    }
}
