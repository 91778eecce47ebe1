//! Loading and saving configurations as TOML or JSON.
//!
//! Every loader validates what it parsed, so a returned configuration is
//! always usable.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult, Validate};

/// Serialized configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parses and validates a TOML document.
pub fn from_toml_str<T>(content: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = toml::from_str(content)?;
    config.validate_or_error()?;
    Ok(config)
}

/// Parses and validates a JSON document.
pub fn from_json_str<T>(content: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = serde_json::from_str(content)?;
    config.validate_or_error()?;
    Ok(config)
}

/// Parses and validates a document in the given format.
pub fn from_str<T>(content: &str, format: ConfigFormat) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    match format {
        ConfigFormat::Toml => from_toml_str(content),
        ConfigFormat::Json => from_json_str(content),
    }
}

/// Loads a configuration file, choosing the format by extension.
///
/// # Example
///
/// ```rust,no_run
/// use fixflow_config::{load_file, PricingConfig};
///
/// let config: PricingConfig = load_file("fixflow.toml").unwrap();
/// ```
pub fn load_file<T, P>(path: P) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&content, format)
}

/// Serializes a configuration in the given format.
pub fn to_string<T: Serialize>(config: &T, format: ConfigFormat) -> ConfigResult<String> {
    match format {
        ConfigFormat::Toml => Ok(toml::to_string_pretty(config)?),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

/// Writes a configuration file, choosing the format by extension.
pub fn save_file<T, P>(config: &T, path: P) -> ConfigResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = to_string(config, ConfigFormat::from_path(path)?)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PricingConfig;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PricingConfig = from_toml_str("max_iterations = 250\n").unwrap();

        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.default_frequency, 2);
    }

    #[test]
    fn test_json() {
        let config: PricingConfig =
            from_json_str(r#"{"initial_guess": 0.05, "default_face": 1000.0}"#).unwrap();

        assert!((config.initial_guess - 0.05).abs() < f64::EPSILON);
        assert!((config.default_face - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result: ConfigResult<PricingConfig> = from_toml_str("max_iterations = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation { ref field, .. }) if field == "max_iterations"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: ConfigResult<PricingConfig> = from_toml_str("tolerance = 1e-8\n");
        assert!(matches!(result, Err(ConfigError::Deserialization(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result: ConfigResult<PricingConfig> = from_json_str("{");
        assert!(matches!(result, Err(ConfigError::Deserialization(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/fixflow.TOML")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("fixflow.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("fixflow.yaml")).is_err());
        assert!(ConfigFormat::from_path(Path::new("fixflow")).is_err());
    }

    #[test]
    fn test_to_string_round_trip() {
        let config = PricingConfig::high_precision();

        for format in [ConfigFormat::Toml, ConfigFormat::Json] {
            let text = to_string(&config, format).unwrap();
            let back: PricingConfig = from_str(&text, format).unwrap();
            assert_eq!(back, config);
        }
    }
}
