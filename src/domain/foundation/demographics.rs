//! Demographic hints extracted from conversation text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary sex enumeration used for default adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Optional demographic hints.
///
/// Absent fields are simply omitted, never defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
}

impl Demographics {
    /// Returns true if no demographic hint is present.
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.sex.is_none()
    }

    /// Merges newer hints over this record, field-wise.
    ///
    /// A newer `Some` wins; a newer `None` never erases a known field.
    pub fn merge(&mut self, newer: Demographics) {
        if newer.age.is_some() {
            self.age = newer.age;
        }
        if newer.sex.is_some() {
            self.sex = newer.sex;
        }
    }
}
