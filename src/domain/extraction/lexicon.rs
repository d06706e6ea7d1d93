//! Symptom phrase lexicon.
//!
//! Each tag owns an ordered phrase list; matching is lower-cased substring
//! containment. The first phrase hit emits the tag and stops scanning that
//! tag's remaining phrases.

use crate::domain::foundation::SymptomTag;

/// Returns the phrase alternatives for a symptom tag.
pub(super) fn phrases(tag: SymptomTag) -> &'static [&'static str] {
    match tag {
        SymptomTag::ChestPain => &[
            "chest pain",
            "chest discomfort",
            "angina",
            "tightness in chest",
            "heart hurts",
        ],
        SymptomTag::ShortnessOfBreath => &[
            "shortness of breath",
            "breathless",
            "difficulty breathing",
            "dyspnea",
            "cant breathe",
        ],
        SymptomTag::Fatigue => &["tired", "fatigue", "exhausted", "weak", "low energy", "lethargic"],
        SymptomTag::Dizziness => &["dizzy", "lightheaded", "faint", "spinning"],
        SymptomTag::Thirst => &["thirsty", "dry mouth", "drinking water", "polydipsia"],
        SymptomTag::FrequentUrination => &["urinating", "peeing", "bathroom", "polyuria"],
        SymptomTag::Palpitations => &["palpitations", "heart racing", "skipped beat", "fluttering"],
        SymptomTag::Swelling => &["swelling", "edema", "swollen", "puffy"],
        SymptomTag::Pale => &["pale", "pallor", "white skin"],
        SymptomTag::Nausea => &["nausea", "vomiting", "sick to stomach"],
        SymptomTag::Headache => &["headache", "head hurts", "migraine"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_phrases() {
        for tag in SymptomTag::all() {
            assert!(!phrases(*tag).is_empty(), "{tag} has no phrases");
        }
    }

    #[test]
    fn phrases_are_lower_case() {
        for tag in SymptomTag::all() {
            for phrase in phrases(*tag) {
                assert_eq!(*phrase, phrase.to_lowercase(), "{tag}: '{phrase}'");
            }
        }
    }
}
