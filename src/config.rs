use log::{warn, Level};
use serde::Deserialize;

use crate::error::SiteError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const CONFIG_ATTRIBUTE: &str = "data-site-config";

/// Page tunables. Any field left out of the JSON keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal_threshold: f64,
    pub lazy_threshold: f64,
    pub lazy_root_margin: String,
    pub sticky_threshold: f64,
    pub hover_opacity: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.15,
            lazy_threshold: 0.0,
            lazy_root_margin: "-200px".to_string(),
            sticky_threshold: 0.0,
            hover_opacity: 0.5,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        let fields = [
            ("reveal_threshold", self.reveal_threshold),
            ("lazy_threshold", self.lazy_threshold),
            ("sticky_threshold", self.sticky_threshold),
            ("hover_opacity", self.hover_opacity),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(SiteError::InvalidSetting { field, value });
            }
        }
        Ok(())
    }

    /// Reads overrides from `<body data-site-config='{...}'>`, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = SiteConfig::default();
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.lazy_root_margin, "-200px");
        assert_eq!(config.hover_opacity, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"hover_opacity": 0.3}"#).unwrap();
        assert_eq!(config.hover_opacity, 0.3);
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.lazy_root_margin, "-200px");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidSetting {
                field: "reveal_threshold",
                ..
            }
        ));
    }
}
