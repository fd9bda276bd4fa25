//! UI preferences

use serde::{Deserialize, Serialize};

use crate::gesture::{SheetConfig, SwipeConfig};
use crate::{Error, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub swipe: SwipeConfig,
    pub sheet: SheetConfig,
    pub log_level: String, // trace, debug, info, warn, error
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            swipe: SwipeConfig::default(),
            sheet: SheetConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: UiConfig =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let swipe = &self.swipe;
        if !(swipe.action_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "swipe.action_width must be positive, got {}",
                swipe.action_width
            )));
        }
        if swipe.action_count == 0 {
            return Err(Error::InvalidConfig("swipe.action_count must be at least 1".to_string()));
        }
        if !(swipe.activation_distance >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "swipe.activation_distance must not be negative, got {}",
                swipe.activation_distance
            )));
        }
        if !(swipe.reveal_fraction > 0.0 && swipe.reveal_fraction <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "swipe.reveal_fraction must be in (0, 1], got {}",
                swipe.reveal_fraction
            )));
        }
        if swipe.reveal_threshold() < swipe.activation_distance {
            return Err(Error::InvalidConfig(format!(
                "swipe reveal threshold {} is below swipe.activation_distance {}",
                swipe.reveal_threshold(),
                swipe.activation_distance
            )));
        }

        let sheet = &self.sheet;
        if !(sheet.dismiss_distance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sheet.dismiss_distance must be positive, got {}",
                sheet.dismiss_distance
            )));
        }
        if !(sheet.drag_activation >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sheet.drag_activation must not be negative, got {}",
                sheet.drag_activation
            )));
        }
        if !(0.0..=1.0).contains(&sheet.backdrop_opacity) {
            return Err(Error::InvalidConfig(format!(
                "sheet.backdrop_opacity must be in [0, 1], got {}",
                sheet.backdrop_opacity
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!("unknown log level {}", self.log_level)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheet.dismiss_distance, 50.0);
        assert_eq!(config.swipe.reveal_threshold(), 88.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = UiConfig::from_json(r#"{"sheet":{"dismiss_distance":80.0}}"#).unwrap();
        assert_eq!(config.sheet.dismiss_distance, 80.0);
        assert_eq!(config.sheet.exit_ms, 300);
        assert_eq!(config.swipe, SwipeConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            r#"{"swipe":{"reveal_fraction":0.0}}"#,
            r#"{"swipe":{"reveal_fraction":1.5}}"#,
            r#"{"swipe":{"action_count":0}}"#,
            r#"{"swipe":{"action_width":-4.0}}"#,
            r#"{"sheet":{"dismiss_distance":0.0}}"#,
            r#"{"sheet":{"backdrop_opacity":2.0}}"#,
            r#"{"log_level":"loud"}"#,
            r#"not json"#,
        ];
        for json in cases {
            assert!(
                matches!(UiConfig::from_json(json), Err(Error::InvalidConfig(_))),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_rejects_threshold_below_activation_distance() {
        let mut config = UiConfig::default();
        config.swipe.reveal_fraction = 0.05;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = UiConfig::default();
        config.swipe.action_width = 4.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        // a threshold equal to the activation distance is fine
        let mut config = UiConfig::default();
        config.swipe.action_width = 10.0;
        config.swipe.reveal_fraction = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip() {
        let mut config = UiConfig::default();
        config.swipe.reveal_fraction = 0.3;
        config.log_level = "debug".to_string();

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(UiConfig::from_json(&json).unwrap(), config);
    }
}
