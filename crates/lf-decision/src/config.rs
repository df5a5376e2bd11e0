use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables of the decision node. Loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Scales the commanded turn rate.
    pub angular_vel_multiplier: f64,
    /// Clamp on `|angular.z|`.
    pub angular_vel_cap: f64,
    /// Weight of a new slope sample in the rolling angle average.
    pub rolling_average_constant: f64,
    /// Fraction of the image height that counts as "enough" valid samples.
    pub percent_of_samples_needed: f64,
    /// Fraction of the image height sampled per scan direction.
    pub percent_of_image_sampled: f64,
    /// Measured `|angle|` (degrees) at or below which the vehicle turns away
    /// from the line instead.
    pub move_away_threshold: f64,
    /// Loaded and validated but not consulted by the decision.
    pub confidence_threshold: f64,
    /// Minimum fraction of line pixels in the frame.
    pub percent_of_white_needed: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            angular_vel_multiplier: 1.0,
            angular_vel_cap: 1.0,
            rolling_average_constant: 0.25,
            percent_of_samples_needed: 0.125,
            percent_of_image_sampled: 0.25,
            move_away_threshold: 25.0,
            confidence_threshold: 60.0,
            percent_of_white_needed: 0.05,
        }
    }
}

impl DecisionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("angular_vel_multiplier", self.angular_vel_multiplier),
            ("angular_vel_cap", self.angular_vel_cap),
            ("move_away_threshold", self.move_away_threshold),
            ("confidence_threshold", self.confidence_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        let fractions = [
            ("rolling_average_constant", self.rolling_average_constant),
            ("percent_of_samples_needed", self.percent_of_samples_needed),
            ("percent_of_image_sampled", self.percent_of_image_sampled),
            ("percent_of_white_needed", self.percent_of_white_needed),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} is outside [0, 1]")));
            }
        }

        if self.angular_vel_cap < 0.0 {
            return Err(invalid(
                "angular_vel_cap",
                format!("{} is negative", self.angular_vel_cap),
            ));
        }
        Ok(())
    }

    /// Rows visited per scan direction for a frame of `height` rows.
    ///
    /// Divisions `1..budget` are sampled, i.e. every integer strictly below
    /// `height * percent_of_image_sampled`.
    pub fn sample_budget(&self, height: usize) -> usize {
        let budget = (height as f64 * self.percent_of_image_sampled).ceil();
        if budget.is_finite() && budget > 0.0 {
            budget as usize
        } else {
            0
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DecisionConfig};

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = DecisionConfig::from_json_str(r#"{ "move_away_threshold": 10.0 }"#)
            .expect("valid config");
        assert_eq!(cfg.move_away_threshold, 10.0);
        assert_eq!(cfg.rolling_average_constant, 0.25);
        assert_eq!(cfg.percent_of_white_needed, 0.05);
        assert_eq!(cfg.confidence_threshold, 60.0);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let err = DecisionConfig::from_json_str(r#"{ "rolling_average_constant": 1.5 }"#)
            .expect_err("must reject");
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "rolling_average_constant"),
            other => panic!("unexpected error: {other}"),
        }

        let cfg = DecisionConfig {
            angular_vel_cap: -0.5,
            ..DecisionConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DecisionConfig::from_json_str("{ not json").expect_err("must reject");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DecisionConfig::load(std::path::Path::new("/nonexistent/lf/config.json"))
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn sample_budget_matches_fractional_bound() {
        let cfg = DecisionConfig::default();
        assert_eq!(cfg.sample_budget(80), 20);
        // 30 * 0.25 = 7.5: divisions 1..=7.
        assert_eq!(cfg.sample_budget(30), 8);
        assert_eq!(cfg.sample_budget(0), 0);
    }
}
