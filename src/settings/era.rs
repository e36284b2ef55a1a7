//! Game era

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Historical period the game is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Early,
    Middle,
    Late,
}

impl Era {
    /// Integer code passed to the server's `--era` flag.
    pub fn to_int(self) -> u8 {
        match self {
            Era::Early => 1,
            Era::Middle => 2,
            Era::Late => 3,
        }
    }

    /// Document spelling of this era.
    pub fn as_str(self) -> &'static str {
        match self {
            Era::Early => "EA",
            Era::Middle => "MA",
            Era::Late => "LA",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EA" => Ok(Era::Early),
            "MA" => Ok(Era::Middle),
            "LA" => Ok(Era::Late),
            other => Err(ValidationError::InvalidValue {
                field: "era",
                value: other.to_string(),
            }),
        }
    }
}
