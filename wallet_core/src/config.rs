//! Transaction builder configuration with TOML file support.

use std::path::Path;

use quill_types::params::MAX_PRECISION;
use quill_types::Fixed64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::CandidateOrder;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_precision {0} exceeds the amount precision {MAX_PRECISION}")]
    Precision(u8),

    #[error("per_output_fee {0} is negative")]
    NegativeFee(Fixed64),
}

/// Configuration for a [`TransactionBuilder`](crate::TransactionBuilder).
///
/// Can be loaded from a TOML file via [`BuilderConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Fee deducted from each transfer output's delivered value, as a decimal string.
    /// Never negative; set it through [`BuilderConfig::with_fee`].
    #[serde(default, with = "amount_string")]
    per_output_fee: Fixed64,

    /// Largest precision a registered asset may declare.
    #[serde(default = "default_max_precision")]
    pub max_precision: u8,

    /// Order unspent candidates are tried in.
    #[serde(default)]
    pub candidate_order: CandidateOrder,
}

fn default_max_precision() -> u8 {
    MAX_PRECISION
}

mod amount_string {
    use quill_types::Fixed64;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Fixed64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Fixed64, D::Error> {
        let text = String::deserialize(deserializer)?;
        Fixed64::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl BuilderConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.max_precision > MAX_PRECISION {
            return Err(ConfigError::Precision(config.max_precision));
        }
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn per_output_fee(&self) -> Fixed64 {
        self.per_output_fee
    }

    /// Set the per-output fee; a negative `fee` is [`ConfigError::NegativeFee`].
    pub fn with_fee(mut self, fee: Fixed64) -> Result<Self, ConfigError> {
        if fee.raw() < 0 {
            return Err(ConfigError::NegativeFee(fee));
        }
        self.per_output_fee = fee;
        Ok(self)
    }

    pub fn with_max_precision(mut self, max_precision: u8) -> Result<Self, ConfigError> {
        if max_precision > MAX_PRECISION {
            return Err(ConfigError::Precision(max_precision));
        }
        self.max_precision = max_precision;
        Ok(self)
    }

    pub fn with_candidate_order(mut self, order: CandidateOrder) -> Self {
        self.candidate_order = order;
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            per_output_fee: Fixed64::ZERO,
            max_precision: default_max_precision(),
            candidate_order: CandidateOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = BuilderConfig::default()
            .with_fee(Fixed64::new(150_000))
            .unwrap();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = BuilderConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = BuilderConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.per_output_fee, Fixed64::ZERO);
        assert_eq!(config.max_precision, 8);
        assert_eq!(config.candidate_order, CandidateOrder::ByOutpoint);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            per_output_fee = "0.001"
            candidate_order = "as_supplied"
        "#;
        let config = BuilderConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.per_output_fee, Fixed64::new(100_000));
        assert_eq!(config.candidate_order, CandidateOrder::AsSupplied);
        assert_eq!(config.max_precision, 8);
    }

    #[test]
    fn bad_fee_rejected() {
        let err = BuilderConfig::from_toml_str(r#"per_output_fee = "lots""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_fee_rejected() {
        let err = BuilderConfig::default()
            .with_fee(Fixed64::new(-10))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeFee(fee) if fee.raw() == -10));

        let err = BuilderConfig::from_toml_str(r#"per_output_fee = "-0.1""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn excessive_precision_rejected() {
        let err = BuilderConfig::from_toml_str("max_precision = 9").unwrap_err();
        assert!(matches!(err, ConfigError::Precision(9)));
    }

    #[test]
    fn missing_file_returns_io_error() {
        let result = BuilderConfig::from_toml_file("/nonexistent/quill.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builder.toml");
        std::fs::write(&path, "per_output_fee = \"1\"\nmax_precision = 4\n").unwrap();
        let config = BuilderConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.per_output_fee, Fixed64::new(100_000_000));
        assert_eq!(config.max_precision, 4);
    }
}
