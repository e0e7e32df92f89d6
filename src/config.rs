//! Engine configuration.
//!
//! [`EngineConfig`] carries the few knobs an engine has. Missing fields in a
//! JSON document fall back to defaults, so partial documents are valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a single engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Label attached to every log event emitted by the engine.
    pub name: String,

    /// Number of successful transitions retained in the history window.
    /// Zero disables history.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "fsm".to_string(),
            history_capacity: 0,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{ "name": "door" }"#).unwrap();
    /// assert_eq!(config.name, "door");
    /// assert_eq!(config.history_capacity, 0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = EngineConfig::default();
        assert_eq!(config.name, "fsm");
        assert_eq!(config.history_capacity, 0);
    }

    #[test]
    fn deserialize_partial_json() {
        let config = EngineConfig::from_json(r#"{ "history_capacity": 16 }"#).unwrap();
        assert_eq!(config.name, "fsm");
        assert_eq!(config.history_capacity, 16);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = EngineConfig::from_json(r#"{ "history_capacity": "lots" }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn fluent_setters_override_defaults() {
        let config = EngineConfig::default()
            .with_name("session")
            .with_history_capacity(3);
        assert_eq!(config.name, "session");
        assert_eq!(config.history_capacity, 3);
    }
}
