//! Onboard configuration
//!
//! One file holds the freeze calendar and transcript defaults. JSON, YAML
//! and TOML are accepted; the format is chosen by file extension.

use onboard_freeze::{FreezeCalendar, FreezePeriodRecord, FreezeResult};
use onboard_transcript::{TranscriptError, TranscriptFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid TOML
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Extension is not json, yaml, yml or toml
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Transcript format setting, `auto` sniffs the content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatChoice {
    /// Detect from content
    #[default]
    Auto,
    /// WebVTT with voice tags
    TimedCue,
    /// `Speaker: message` lines
    PlainText,
}

impl FormatChoice {
    /// Explicit format, or `None` to detect
    #[must_use]
    pub fn format(self) -> Option<TranscriptFormat> {
        match self {
            Self::Auto => None,
            Self::TimedCue => Some(TranscriptFormat::TimedCue),
            Self::PlainText => Some(TranscriptFormat::PlainText),
        }
    }
}

impl fmt::Display for FormatChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Some(format) => fmt::Display::fmt(&format, f),
            None => f.write_str("auto"),
        }
    }
}

impl FromStr for FormatChoice {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        Ok(match s.parse::<TranscriptFormat>()? {
            TranscriptFormat::TimedCue => Self::TimedCue,
            TranscriptFormat::PlainText => Self::PlainText,
        })
    }
}

/// Transcript defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Format used when the command line does not name one
    pub format: FormatChoice,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    /// Freeze periods as administered
    #[serde(alias = "freezePeriods")]
    pub freeze_periods: Vec<FreezePeriodRecord>,
    /// Transcript defaults
    pub transcript: TranscriptSettings,
}

impl OnboardConfig {
    /// Create empty configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With one more freeze period
    #[must_use]
    pub fn with_freeze_period(mut self, record: FreezePeriodRecord) -> Self {
        self.freeze_periods.push(record);
        self
    }

    /// With default transcript format
    #[inline]
    #[must_use]
    pub fn with_transcript_format(mut self, format: FormatChoice) -> Self {
        self.transcript.format = format;
        self
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a file, picking the parser by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, has an unknown extension or
    /// does not parse
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_str() {
            "json" => Self::from_json,
            "yaml" | "yml" => Self::from_yaml,
            "toml" => Self::from_toml,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&text)?;
        tracing::debug!(
            "Loaded config {} with {} freeze periods",
            path.display(),
            config.freeze_periods.len()
        );
        Ok(config)
    }

    /// Build the validated freeze calendar
    ///
    /// # Errors
    /// Returns error if active periods are inverted or overlap
    pub fn calendar(&self) -> FreezeResult<FreezeCalendar> {
        FreezeCalendar::from_records(self.freeze_periods.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_auto() {
        let config = OnboardConfig::new();
        assert!(config.freeze_periods.is_empty());
        assert_eq!(config.transcript.format, FormatChoice::Auto);
    }

    #[test]
    fn yaml_config() {
        let yaml = r#"
freeze_periods:
  - id: fp-2024
    name: Holiday freeze
    start_date: "2024-11-01"
    end_date: "2025-01-05"
transcript:
  format: plain-text
"#;
        let config = OnboardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.freeze_periods.len(), 1);
        assert_eq!(config.transcript.format.format(), Some(TranscriptFormat::PlainText));
        assert_eq!(config.calendar().unwrap().periods().len(), 1);
    }

    #[test]
    fn toml_config() {
        let text = r#"
[transcript]
format = "timed-cue"

[[freeze_periods]]
id = "fp-2024"
name = "Holiday freeze"
start_date = "2024-11-01"
end_date = "2025-01-05"
helix_email = "helix@example.com"
"#;
        let config = OnboardConfig::from_toml(text).unwrap();
        assert_eq!(config.transcript.format, FormatChoice::TimedCue);
        assert_eq!(config.freeze_periods[0].helix_email, "helix@example.com");
    }

    #[test]
    fn json_camel_case_keys() {
        let json = r#"{"freezePeriods": [{"id": "a", "name": "A",
            "startDate": "2024-11-01", "endDate": "2024-11-30"}]}"#;
        let config = OnboardConfig::from_json(json).unwrap();
        assert_eq!(config.freeze_periods[0].id, "a");
    }

    #[test]
    fn unsupported_extension() {
        let err = OnboardConfig::load("/tmp/onboard.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn format_choice_from_str() {
        assert_eq!("auto".parse::<FormatChoice>().unwrap(), FormatChoice::Auto);
        assert_eq!("VTT".parse::<FormatChoice>().unwrap(), FormatChoice::TimedCue);
        assert_eq!("txt".parse::<FormatChoice>().unwrap(), FormatChoice::PlainText);
        assert!("srt".parse::<FormatChoice>().is_err());
        assert_eq!(FormatChoice::Auto.to_string(), "auto");
    }

    #[test]
    fn builders() {
        let record: FreezePeriodRecord = serde_json::from_str(
            r#"{"id": "a", "name": "A", "startDate": "2024-11-01", "endDate": "2024-11-30"}"#,
        )
        .unwrap();
        let config = OnboardConfig::new()
            .with_freeze_period(record)
            .with_transcript_format(FormatChoice::PlainText);
        assert_eq!(config.transcript.format, FormatChoice::PlainText);
        assert_eq!(config.freeze_periods.len(), 1);
    }
}
