//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty names) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

/// Longest accepted entity name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed length.
    #[error("value is longer than {0} characters")]
    TooLong(usize),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(GameId, "Unique identifier for a game.");
id_newtype!(TagId, "Unique identifier for a tag.");
id_newtype!(PlatformId, "Unique identifier for a platform.");

/// Trimmed display name shared by games, tags and platforms.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityName(String);

impl EntityName {
    /// Trims the input and checks it is non-empty and not too long.
    pub fn new<S: AsRef<str>>(name: S) -> Result<Self, TypeConstraintError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(TypeConstraintError::TooLong(MAX_NAME_LENGTH));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(GameId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(TagId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PlatformId::new(9).map(PlatformId::get), Ok(9));
    }

    #[test]
    fn names_are_trimmed() {
        let name = EntityName::new("  Doom  ").unwrap();
        assert_eq!(name.as_str(), "Doom");
        assert_eq!(name.to_string(), "Doom");
    }

    #[test]
    fn ids_display_as_raw_value() {
        assert_eq!(GameId::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(EntityName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn long_names_are_rejected() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            EntityName::new(long),
            Err(TypeConstraintError::TooLong(MAX_NAME_LENGTH))
        );
        assert!(EntityName::new("x".repeat(MAX_NAME_LENGTH)).is_ok());
    }
}
