//! TOML configuration for the `connband` binary.
//!
//! Parsed in two stages: a permissive `*Input` layer that accepts missing
//! fields, then [`ConfigInput::resolve`] which validates and fills defaults.
//! Command-line flags are applied on top by the caller.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use connband_core::Rat;
use connband_core::error::ParseRatError;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    Rat(#[from] ParseRatError),
    #[error("unknown output format {0:?} (expected text or json)")]
    Format(String),
}

// ─── Output Format ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Format(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// ─── Raw Input ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigInput {
    pub version: u32,
    pub log_level: Option<String>,
    pub lookup: LookupConfigInput,
    pub output: OutputConfigInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LookupConfigInput {
    pub rat: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfigInput {
    pub format: Option<String>,
}

// ─── Resolved Config ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Generation assumed when `--rat` is not given.
    pub rat: Rat,
    /// Reject codes outside the generation's channel domain.
    pub strict: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            rat: Rat::Lte,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub version: u32,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub lookup: LookupConfig,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: "warn".into(),
            lookup: LookupConfig::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ConfigInput {
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let defaults = Config::default();

        let rat = match self.lookup.rat.as_deref() {
            Some(s) => s.parse::<Rat>()?,
            None => defaults.lookup.rat,
        };
        let format = match self.output.format.as_deref() {
            Some(s) => s.parse::<OutputFormat>()?,
            None => defaults.format,
        };
        let log_level = self
            .log_level
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Config {
            version,
            log_level,
            lookup: LookupConfig {
                rat,
                strict: self.lookup.strict.unwrap_or(defaults.lookup.strict),
            },
            format,
        })
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Config::default());
        }
        let parsed: ConfigInput = toml::from_str(input)?;
        parsed.resolve()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml_config_basic() {
        let toml = r#"
            version = 1
            log_level = "connband=debug"

            [lookup]
            rat = "5g"
            strict = true

            [output]
            format = "JSON"
        "#;

        let cfg = Config::from_toml_str(toml).unwrap();
        assert_eq!(cfg.version, CONFIG_VERSION);
        assert_eq!(cfg.log_level, "connband=debug");
        assert_eq!(cfg.lookup.rat, Rat::Nr);
        assert!(cfg.lookup.strict);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_toml_str("  \n").unwrap(), Config::default());
        assert_eq!(Config::from_toml_str("version = 0").unwrap(), Config::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = Config::from_toml_str("[lookup]\nrat = \"nr\"\n").unwrap();
        assert_eq!(cfg.lookup.rat, Rat::Nr);
        assert!(!cfg.lookup.strict);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn blank_log_level_falls_back() {
        let cfg = Config::from_toml_str("log_level = \"  \"").unwrap();
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn rejects_future_version() {
        let err = Config::from_toml_str("version = 2").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(2)));
    }

    #[test]
    fn rejects_unknown_rat() {
        let err = Config::from_toml_str("[lookup]\nrat = \"3g\"").unwrap_err();
        assert!(matches!(err, ConfigError::Rat(_)));
        assert!(err.to_string().contains("3g"));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Config::from_toml_str("[output]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Format(ref f) if f == "xml"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::from_toml_str("[lookup\nrat = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/connband.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/connband.toml"));
    }
}
