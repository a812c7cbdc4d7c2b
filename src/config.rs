//! Tracer configuration.

use serde::{Deserialize, Serialize};

use crate::symbols::DEFAULT_LABEL_PREFIX;
use crate::TracerError;

/// Maximum number of words in one `DW` row.
pub const MAX_DATA_WORDS: usize = 5;

/// Maximum number of bytes in one `DB` row.
pub const MAX_DATA_BYTES: usize = 10;

/// Options controlling how banks are rendered and how labels are named.
///
/// Missing fields take their default when deserializing:
///
/// ```
/// use minimon_trace::TracerConfig;
///
/// let config = TracerConfig::from_json(r#"{ "max_data_bytes": 16 }"#).unwrap();
/// assert_eq!(config.max_data_bytes, 16);
/// assert_eq!(config.max_data_words, 5);
/// assert_eq!(config.label_prefix, "loc_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Words per `DW` row.
    pub max_data_words: usize,

    /// Bytes per `DB` row.
    pub max_data_bytes: usize,

    /// Prefix of synthesized branch-target labels.
    pub label_prefix: String,
}

impl TracerConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, TracerError> {
        let config: TracerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce empty rows.
    pub fn validate(&self) -> Result<(), TracerError> {
        if self.max_data_words == 0 {
            return Err(TracerError::InvalidConfig(
                "max_data_words must be at least 1".to_string(),
            ));
        }

        if self.max_data_bytes == 0 {
            return Err(TracerError::InvalidConfig(
                "max_data_bytes must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_data_words: MAX_DATA_WORDS,
            max_data_bytes: MAX_DATA_BYTES,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}
