//! Output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest precision that still changes the printed digits of an f64.
pub const MAX_PRECISION: usize = 17;

/// Output configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Digits after the decimal point in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Report format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge {
                max: MAX_PRECISION,
                actual: self.precision,
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.precision, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_limit() {
        let config = OutputConfig {
            format: OutputFormat::Table,
            precision: 18,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PrecisionTooLarge { max: 17, actual: 18 })
        ));
    }

    #[test]
    fn test_format_deserialization() {
        let config: OutputConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, 6);
    }
}
