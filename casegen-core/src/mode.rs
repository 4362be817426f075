//! Generation mode.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How use cases receive their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `call` mirrors the repository method's parameter list.
    #[default]
    Simple,
    /// `call` takes a single immutable params object with value equality.
    #[serde(alias = "pro")]
    Professional,
}

impl Mode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Professional => "professional",
        }
    }

    /// Returns true if a params holder is generated alongside each use case.
    pub fn has_params(&self) -> bool {
        matches!(self, Mode::Professional)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "professional" | "pro" => Ok(Mode::Professional),
            _ => Err(format!(
                "unknown mode '{}', expected 'simple' or 'professional'",
                s
            )),
        }
    }
}
