//! Severity value object (0-10 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An ordinal importance score between 0 and 10 inclusive.
///
/// Used only to break ties among implication candidates for the same
/// parameter; it never feeds the feature vector itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    /// Maximum severity.
    pub const MAX: Self = Self(10);

    /// Creates a new Severity, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(10))
    }

    /// Creates a Severity, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 10 {
            return Err(ValidationError::out_of_range("severity", 0, 10, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(Severity::new(0).value(), 0);
        assert_eq!(Severity::new(7).value(), 7);
        assert_eq!(Severity::new(10).value(), 10);
    }

    #[test]
    fn new_clamps_to_10() {
        assert_eq!(Severity::new(11).value(), 10);
        assert_eq!(Severity::new(255).value(), 10);
    }

    #[test]
    fn try_new_rejects_over_10() {
        assert!(Severity::try_new(11).is_err());
        assert!(Severity::try_new(10).is_ok());
    }

    #[test]
    fn ordering_works() {
        assert!(Severity::new(4) < Severity::new(9));
        assert_eq!(Severity::new(10), Severity::MAX);
    }

    #[test]
    fn displays_as_fraction_of_10() {
        assert_eq!(format!("{}", Severity::new(8)), "8/10");
    }
}
