//! # RBFS Types
//!
//! Small validated value types shared by the core and the HTTP layer.

use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors produced when parsing a [`RecordId`] from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("record id must be a positive integer, got {0:?}")]
    Invalid(String),
}

/// Storage-assigned identifier of a row.
///
/// Identifiers are owned by the storage layer: they are only ever produced by an insert and
/// are never invented by callers. Zero is reserved as "never assigned".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(RecordIdError::Invalid(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Posto Central  ").expect("should accept padded text");
        assert_eq!(text.as_str(), "Posto Central");
        assert_eq!(text.into_inner(), "Posto Central");
    }

    #[test]
    fn test_non_empty_text_rejects_blank() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(" \t\n"), Err(TextError::Empty)));
    }

    #[test]
    fn test_record_id_parses_positive_integers() {
        assert_eq!("42".parse::<RecordId>(), Ok(RecordId::new(42)));
        assert_eq!(" 7 ".parse::<RecordId>(), Ok(RecordId::new(7)));
    }

    #[test]
    fn test_record_id_rejects_zero_negative_and_text() {
        for input in ["0", "-3", "abc", "", "1.5"] {
            assert!(
                input.parse::<RecordId>().is_err(),
                "{input:?} should not parse as a record id"
            );
        }
    }

    #[test]
    fn test_record_id_serialises_as_plain_number() {
        let json = serde_json::to_string(&RecordId::new(12)).expect("should serialise");
        assert_eq!(json, "12");
    }
}
