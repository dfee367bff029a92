//! Format-agnostic settings loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Supported on-disk settings formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension (`.toml`, `.json`,
/// `.yaml`/`.yml`) and handles serialization transparently.
#[derive(Debug, Default)]
pub struct ConfigStore {
    robustness: io::RobustnessConfig,
}

impl ConfigStore {
    /// Create a new ConfigStore with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigStore with custom robustness settings.
    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ConfigFormat::detect(path)?;
        let content = io::read_text(path)?;

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Load configuration if the file exists, `None` otherwise.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path, "no config file, using defaults");
            return Ok(None);
        }
        self.load(path).map(Some)
    }

    /// Save configuration to a file atomically.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = ConfigFormat::detect(path)?;

        let serialize_error = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?
            }
        };

        io::write_atomic(path, content.as_bytes(), self.robustness)
    }
}
