//! Generator configuration — optional ~/.chordloop/config.yaml.
//!
//! Every field has a default, so partial files work and a missing file means
//! the built-in behavior.

pub mod persistence;

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use persistence::{default_config_path, load_config, save_config};

use crate::chord::{load_catalog, CatalogError, DegreeCatalog, DEFAULT_VOICE_LEADING_CHANCE};
use crate::pattern::{PatternLibrary, ScaleType, VariationEngine, VariationProbabilities};
use crate::progression::ChordProgressionBuilder;

/// Settings for generating and voicing progressions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chords per progression.
    pub length: usize,
    /// Voices per chord voicing.
    pub voices: usize,
    /// Scale the progression is requested in.
    pub scale: ScaleType,
    /// Firing probability of each pattern variation step.
    pub variation: VariationProbabilities,
    /// Probability that a chained voicing is pulled toward the previous one.
    pub voice_leading: f64,
    /// Optional YAML catalog replacing the built-in chords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 8,
            voices: 4,
            scale: ScaleType::Major,
            variation: VariationProbabilities::default(),
            voice_leading: DEFAULT_VOICE_LEADING_CHANCE,
            catalog: None,
        }
    }
}

impl GeneratorConfig {
    /// Check that every probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("variation.substitution", self.variation.substitution),
            ("variation.passing_chord", self.variation.passing_chord),
            ("variation.reversal", self.variation.reversal),
            ("voice_leading", self.voice_leading),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }

    /// A builder using these probabilities and the configured catalog.
    pub fn builder(&self) -> Result<ChordProgressionBuilder, ConfigError> {
        let library = PatternLibrary::new(VariationEngine::new(self.variation));
        let catalog = match &self.catalog {
            Some(path) => load_catalog(path)?,
            None => DegreeCatalog::default(),
        };
        Ok(ChordProgressionBuilder::new(library, catalog))
    }
}

/// An error loading, saving, or applying configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_yaml::Error),
    InvalidProbability { name: &'static str, value: f64 },
    Catalog(CatalogError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be between 0 and 1, got {value}")
            }
            Self::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::InvalidProbability { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn default_config_matches_engine_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, 8);
        assert_eq!(config.voices, 4);
        assert_eq!(config.scale, ScaleType::Major);
        assert_approx_eq!(config.variation.substitution, 0.3);
        assert_approx_eq!(config.variation.passing_chord, 0.2);
        assert_approx_eq!(config.variation.reversal, 0.15);
        assert_approx_eq!(config.voice_leading, 0.3);
        assert!(config.catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_yaml_config() {
        let yaml = r#"
length: 12
voices: 5
scale: major-pentatonic
variation:
  substitution: 0.5
  passing_chord: 0.1
  reversal: 0.0
voice_leading: 0.8
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.length, 12);
        assert_eq!(config.voices, 5);
        assert_eq!(config.scale, ScaleType::MajorPentatonic);
        assert_approx_eq!(config.variation.substitution, 0.5);
        assert_approx_eq!(config.voice_leading, 0.8);
    }

    #[test]
    fn partial_yaml_config() {
        let yaml = "length: 6\nvariation:\n  reversal: 0.5\n";
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.length, 6);
        assert_eq!(config.voices, 4);
        assert_approx_eq!(config.variation.reversal, 0.5);
        assert_approx_eq!(config.variation.substitution, 0.3);
    }

    #[test]
    fn unknown_scale_is_kept() {
        let config: GeneratorConfig = serde_yaml::from_str("scale: mixolydian\n").unwrap();
        assert_eq!(config.scale, ScaleType::Other("mixolydian".to_string()));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut config = GeneratorConfig::default();
        config.variation.passing_chord = 1.5;
        match config.validate() {
            Err(ConfigError::InvalidProbability { name, .. }) => {
                assert_eq!(name, "variation.passing_chord");
            }
            other => panic!("expected InvalidProbability, got {other:?}"),
        }

        let config = GeneratorConfig {
            voice_leading: -0.1,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_uses_configured_probabilities() {
        let config = GeneratorConfig {
            variation: VariationProbabilities::none(),
            ..GeneratorConfig::default()
        };
        let builder = config.builder().unwrap();
        assert_eq!(
            builder.library().engine().probabilities(),
            &VariationProbabilities::none()
        );
    }

    #[test]
    fn builder_reports_missing_catalog() {
        let config = GeneratorConfig {
            catalog: Some(PathBuf::from("/nonexistent/chordloop/catalog.yaml")),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.builder(),
            Err(ConfigError::Catalog(CatalogError::Io(_)))
        ));
    }
}
