//! Scale types — which pattern catalog and rule tables a request uses.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The scale a progression is requested in.
///
/// Any string is accepted: names other than `major` and `major-pentatonic`
/// are kept as [`ScaleType::Other`] and use the major catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScaleType {
    #[default]
    Major,
    MajorPentatonic,
    Other(String),
}

impl ScaleType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Major => "major",
            Self::MajorPentatonic => "major-pentatonic",
            Self::Other(name) => name,
        }
    }

    /// Whether this scale has its own authored catalog (otherwise major is used).
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ScaleType {
    fn from(name: &str) -> Self {
        match name {
            "major" => Self::Major,
            "major-pentatonic" => Self::MajorPentatonic,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ScaleType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ScaleType> for String {
    fn from(scale: ScaleType) -> Self {
        scale.as_str().to_string()
    }
}

impl FromStr for ScaleType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
