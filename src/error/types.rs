//! Error types
//!
//! Defines the errors raised while loading and validating a game settings document.

use std::fmt;
use std::path::{Path, PathBuf};

/// The settings document could not be read or parsed.
///
/// Covers a missing or unreadable file, malformed YAML, and values whose type does not
/// match the schema (e.g. a non-numeric hall-of-fame size).
#[derive(Debug)]
pub struct ParseError {
    path: PathBuf,
    source: config::ConfigError,
}

impl ParseError {
    pub fn new(path: &Path, source: config::ConfigError) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Schema or cross-field constraint violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    EmptyField(&'static str),
    InvalidValue { field: &'static str, value: String },
    ConflictingVictoryConditions,
    NoVictoryCondition,
    ConflictingCataclysm { legacy: u32, victory: u32 },
}

impl ValidationError {
    /// Name of the document field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::EmptyField(field)
            | ValidationError::InvalidValue { field, .. } => *field,
            ValidationError::ConflictingVictoryConditions
            | ValidationError::NoVictoryCondition => "victory",
            ValidationError::ConflictingCataclysm { .. } => "cataclysm",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "Missing required field: {}", field),
            ValidationError::EmptyField(field) => write!(f, "Field cannot be empty: {}", field),
            ValidationError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {:?}", field, value)
            }
            ValidationError::ConflictingVictoryConditions => write!(
                f,
                "Conflicting victory conditions: conquer_all cannot be combined with ascension_points"
            ),
            ValidationError::NoVictoryCondition => write!(
                f,
                "No victory condition: set conquer_all or provide ascension_points"
            ),
            ValidationError::ConflictingCataclysm { legacy, victory } => write!(
                f,
                "Conflicting cataclysm turns: cataclysm is {} but victory.cataclysm is {}",
                legacy, victory
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Any failure while turning a settings document into a game
#[derive(Debug)]
pub enum GameConfigError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl fmt::Display for GameConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            GameConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for GameConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameConfigError::Parse(e) => Some(e),
            GameConfigError::Validation(e) => Some(e),
        }
    }
}

impl From<ParseError> for GameConfigError {
    fn from(error: ParseError) -> Self {
        GameConfigError::Parse(error)
    }
}

impl From<ValidationError> for GameConfigError {
    fn from(error: ValidationError) -> Self {
        GameConfigError::Validation(error)
    }
}
