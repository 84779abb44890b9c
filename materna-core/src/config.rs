//! Assessment window configuration

use serde::{Deserialize, Serialize};

/// Trailing-window configuration for assessment runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Hours of readings the classifier considers recent
    #[serde(default = "default_reading_window")]
    pub reading_window_hours: i64,

    /// Hours of symptoms the classifier considers recent
    #[serde(default = "default_symptom_window")]
    pub symptom_window_hours: i64,

    /// Narrower symptom window used for fine-grained alerts
    #[serde(default = "default_alert_symptom_window")]
    pub alert_symptom_window_hours: i64,
}

fn default_reading_window() -> i64 {
    48
}

fn default_symptom_window() -> i64 {
    72
}

fn default_alert_symptom_window() -> i64 {
    24
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            reading_window_hours: default_reading_window(),
            symptom_window_hours: default_symptom_window(),
            alert_symptom_window_hours: default_alert_symptom_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let config = AssessmentConfig::default();
        assert_eq!(config.reading_window_hours, 48);
        assert_eq!(config.symptom_window_hours, 72);
        assert_eq!(config.alert_symptom_window_hours, 24);
    }

    #[test]
    fn test_deserialize_toml() {
        let toml = r#"
            reading_window_hours = 24
            symptom_window_hours = 48
        "#;
        let config: AssessmentConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.reading_window_hours, 24);
        assert_eq!(config.symptom_window_hours, 48);
        // Unset field falls back to its default
        assert_eq!(config.alert_symptom_window_hours, 24);
    }

    #[test]
    fn test_deserialize_toml_defaults() {
        let toml = r#""#;
        let config: AssessmentConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.reading_window_hours, 48);
    }
}
