//! Top-level Confluence configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FusionConfig, ImprovementConfig, ObservabilityConfig, SchedulerConfig};
use crate::constants::{ENV_PREFIX, MAX_HORIZON_HOURS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONFLUENCE_*`)
/// 2. Config file passed to [`ConfluenceConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluenceConfig {
    pub scheduler: SchedulerConfig,
    pub fusion: FusionConfig,
    pub improvement: ImprovementConfig,
    pub observability: ObservabilityConfig,
}

impl ConfluenceConfig {
    /// Load configuration: defaults, then the optional TOML file, then
    /// environment overrides. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.horizon_hours < 0 {
            return Err(invalid("scheduler.horizon_hours", "must not be negative"));
        }
        if self.scheduler.horizon_hours > MAX_HORIZON_HOURS {
            return Err(ConfigError::ValidationFailed {
                field: "scheduler.horizon_hours".to_string(),
                message: format!("must not exceed {MAX_HORIZON_HOURS}"),
            });
        }
        if !self.scheduler.threshold.is_finite() {
            return Err(invalid("scheduler.threshold", "must be a finite number"));
        }

        let fusion = &self.fusion;
        for (field, value) in [
            ("fusion.low_threshold", fusion.low_threshold),
            ("fusion.high_threshold", fusion.high_threshold),
            ("fusion.strong_connection_threshold", fusion.strong_connection_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if fusion.low_threshold > fusion.high_threshold {
            return Err(invalid(
                "fusion.low_threshold",
                "must not exceed fusion.high_threshold",
            ));
        }

        self.improvement.validate()
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONFLUENCE_SCHEDULER_THRESHOLD`, `CONFLUENCE_IMPROVEMENT_TOP_K`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<i64>("SCHEDULER_HORIZON_HOURS") {
            self.scheduler.horizon_hours = v;
        }
        if let Some(v) = env_parse::<f64>("SCHEDULER_THRESHOLD") {
            self.scheduler.threshold = v;
        }
        if let Some(v) = env_parse::<bool>("FUSION_PARALLEL") {
            self.fusion.parallel = v;
        }
        if let Some(v) = env_parse::<f64>("IMPROVEMENT_BASE_INTERVAL_SECS") {
            self.improvement.base_interval_secs = v;
        }
        if let Some(v) = env_parse::<f64>("IMPROVEMENT_FLOOR_INTERVAL_SECS") {
            self.improvement.floor_interval_secs = v;
        }
        if let Some(v) = env_parse::<usize>("IMPROVEMENT_TOP_K") {
            self.improvement.top_k = v;
        }
        if let Ok(v) = std::env::var(format!("{ENV_PREFIX}LOG_LEVEL")) {
            self.observability.log_level = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    std::env::var(format!("{ENV_PREFIX}{suffix}"))
        .ok()
        .and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
