//! Core configuration for vizij-tween-core.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

/// Which host tick channel drives a registry. The core never looks at this;
/// adapters use it to pick the schedule they tick from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Once per rendered frame.
    #[default]
    Frame,
    /// Once per fixed physics step.
    FixedStep,
}

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Closeness threshold. Color tweens finish once every channel is within
    /// this distance of its target; bool tweens snap once the elapsed fraction
    /// exceeds `1 - resolution`.
    pub resolution: f32,

    pub update_mode: UpdateMode,

    /// Initial clock reading, in seconds.
    pub start_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: 1e-3,
            update_mode: UpdateMode::Frame,
            start_time: 0.0,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.resolution.is_finite() && self.resolution > 0.0 && self.resolution < 1.0) {
            return Err(TweenError::InvalidConfig {
                reason: format!("resolution must be in (0, 1), got {}", self.resolution),
            });
        }
        if !self.start_time.is_finite() {
            return Err(TweenError::InvalidConfig {
                reason: format!("start_time must be finite, got {}", self.start_time),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = Config::from_json_str(r#"{"update_mode": "fixed_step"}"#).unwrap();
        assert_eq!(cfg.update_mode, UpdateMode::FixedStep);
        assert_eq!(cfg.resolution, 1e-3);
        assert_eq!(cfg.start_time, 0.0);
    }

    #[test]
    fn rejects_out_of_range_resolution() {
        for bad in [r#"{"resolution": 0.0}"#, r#"{"resolution": 1.5}"#] {
            assert!(matches!(
                Config::from_json_str(bad),
                Err(TweenError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            Config::from_json_str("{"),
            Err(TweenError::Config(_))
        ));
    }
}
