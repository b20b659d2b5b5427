use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Serialization formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "'{}' (expected yaml, yml or json)",
                other
            ))),
        }
    }
}

/// Parses a config value from a string in the given format.
pub fn parse_str<T: DeserializeOwned>(contents: &str, format: ConfigFormat) -> Result<T, ConfigError> {
    let value = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        ConfigFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(value)
}

/// Reads and parses a config file, choosing the format from its extension.
///
/// # Arguments
/// * `path` - Path to a `.yaml`, `.yml` or `.json` file.
///
/// # Returns
/// The deserialized value; no semantic validation is applied here.
pub fn load_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let format = ConfigFormat::from_path(&path)?;
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents, format)
}

/// Writes a config value to disk in the format implied by the extension.
pub fn save_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), ConfigError> {
    let contents = match ConfigFormat::from_path(&path)? {
        ConfigFormat::Yaml => serde_yaml::to_string(value)?,
        ConfigFormat::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, contents)?;
    Ok(())
}
