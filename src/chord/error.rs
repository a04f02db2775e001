//! Error types for building and loading degree catalogs.

use std::fmt;
use std::io;

/// An error raised while validating or loading a degree catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// A definition names a degree outside 1–7.
    InvalidDegree(u8),
    /// A definition has fewer than three intervals.
    TooFewIntervals { degree: u8, count: usize },
    /// An interval lies outside the two-octave range `0..24`.
    IntervalOutOfRange { degree: u8, interval: i32 },
    /// A catalog does not hold exactly seven definitions.
    WrongEntryCount(usize),
    /// Entry `index` should define degree `index + 1`.
    OutOfOrder { index: usize, degree: u8 },
    /// The catalog file could not be read.
    Io(io::Error),
    /// The catalog file is not valid YAML for a catalog.
    Parse(serde_yaml::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDegree(degree) => write!(f, "degree {degree} is outside 1-7"),
            Self::TooFewIntervals { degree, count } => write!(
                f,
                "degree {degree} has {count} intervals, at least 3 are required"
            ),
            Self::IntervalOutOfRange { degree, interval } => write!(
                f,
                "degree {degree} has interval {interval}, expected 0..24"
            ),
            Self::WrongEntryCount(count) => {
                write!(f, "catalog has {count} entries, expected 7")
            }
            Self::OutOfOrder { index, degree } => write!(
                f,
                "catalog entry {index} defines degree {degree}, expected {}",
                index + 1
            ),
            Self::Io(e) => write!(f, "failed to read catalog: {e}"),
            Self::Parse(e) => write!(f, "invalid catalog: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}
