//! Run configuration for [`Pipeline`](crate::Pipeline).
//!
//! Both `snake_case` and `camelCase` field names are accepted in JSON via
//! `#[serde(alias)]`. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

/// Settings applied to every run of a configured pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Label recorded on the run's tracing span.
    #[serde(default = "default_name")]
    pub name: String,

    /// Upper bound on elements pulled from the source in one run.
    ///
    /// `None` means unbounded. A run whose source holds more elements
    /// fails with [`StreamError::LimitExceeded`] before the extra
    /// element enters the chain.
    #[serde(default, alias = "maxElements")]
    pub max_elements: Option<usize>,
}

fn default_name() -> String {
    "stream".into()
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            max_elements: None,
        }
    }
}

impl StreamConfig {
    /// Create a config with the given run label and no element limit.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the element limit.
    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = Some(limit);
        self
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values no run could honour.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StreamError::ConfigInvalid {
                reason: "name must not be empty".into(),
            });
        }
        if self.max_elements == Some(0) {
            return Err(StreamError::ConfigInvalid {
                reason: "max_elements must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
