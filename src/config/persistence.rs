//! Config persistence — YAML load/save for the generator config.

use std::path::{Path, PathBuf};

use super::{ConfigError, GeneratorConfig};

/// Default path for the generator config.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".chordloop");
    path.push("config.yaml");
    path
}

/// Load and validate a config from a YAML file. Returns defaults if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(GeneratorConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: GeneratorConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save a config to a YAML file, creating parent directories as needed.
pub fn save_config(path: &Path, config: &GeneratorConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn saved_config_reloads_unchanged() {
        let file = NamedTempFile::new().unwrap();
        let config = GeneratorConfig {
            length: 16,
            voices: 6,
            scale: "dorian".into(),
            catalog: Some(PathBuf::from("chords.yaml")),
            ..GeneratorConfig::default()
        };

        save_config(file.path(), &config).unwrap();
        assert_eq!(load_config(file.path()).unwrap(), config);
    }

    #[test]
    fn saving_creates_chordloop_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("config.yaml");
        save_config(&path, &GeneratorConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_rejects_invalid_probability() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "voice_leading: 2.0\n").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::InvalidProbability { name: "voice_leading", .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "length: [not a number\n").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_path_lives_under_chordloop_dir() {
        let path = default_config_path();
        assert!(path.ends_with(".chordloop/config.yaml"));
    }
}
