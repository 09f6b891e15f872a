//! Hook configuration and validation
//!
//! Defaults reproduce the presentation the report pages have always used.
//! JavaScript callers may override any subset of fields with a JSON object.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{HookError, HookResult};

/// Interaction modes understood by Chart.js tooltips
pub const TOOLTIP_MODES: &[&str] = &["point", "nearest", "index", "dataset", "x", "y"];

/// Fixed presentation applied to every rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationOptions {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub begin_at_zero: bool,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub tooltip_mode: String,
    pub tooltip_intersect: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            title: "Report Data Trends".to_string(),
            x_axis_title: "Date".to_string(),
            y_axis_title: "Value".to_string(),
            begin_at_zero: true,
            responsive: true,
            maintain_aspect_ratio: false,
            tooltip_mode: "index".to_string(),
            tooltip_intersect: false,
        }
    }
}

/// Everything the bootstrap and the adapter need to know
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookConfig {
    /// Name the hook is registered under in the LiveSocket `hooks` option
    pub hook_name: String,
    /// Attribute on the host element carrying the chart JSON
    pub data_attribute: String,
    /// LiveView socket mount path
    pub socket_path: String,
    pub log_level: String,
    pub presentation: PresentationOptions,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            hook_name: "ChartHook".to_string(),
            data_attribute: "data-chart-data".to_string(),
            socket_path: "/live".to_string(),
            log_level: "info".to_string(),
            presentation: PresentationOptions::default(),
        }
    }
}

impl HookConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> HookResult<Self> {
        let config: HookConfig = serde_json::from_str(json).map_err(|e| HookError::InvalidConfig {
            message: format!("Failed to parse config: {e}"),
            field: None,
        })?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    pub fn level_filter(&self) -> HookResult<log::LevelFilter> {
        log::LevelFilter::from_str(&self.log_level).map_err(|_| {
            HookError::config(
                format!("Invalid log_level: {}", self.log_level),
                "logLevel",
            )
        })
    }
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &HookConfig) -> HookResult<()> {
        Self::validate_hook_name(&config.hook_name)?;
        Self::validate_data_attribute(&config.data_attribute)?;

        if !config.socket_path.starts_with('/') {
            return Err(HookError::config(
                format!(
                    "Invalid socket_path: {}. Must start with '/'",
                    config.socket_path
                ),
                "socketPath",
            ));
        }

        config.level_filter()?;
        Self::validate_presentation(&config.presentation)?;

        Ok(())
    }

    fn validate_hook_name(name: &str) -> HookResult<()> {
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(HookError::config(
                format!("Invalid hook_name: {name:?}. Must be a JavaScript identifier"),
                "hookName",
            ));
        }
        Ok(())
    }

    /// Data attributes must be `data-` prefixed and lowercase to be readable
    /// through `getAttribute`
    fn validate_data_attribute(attribute: &str) -> HookResult<()> {
        let suffix = attribute.strip_prefix("data-").unwrap_or_default();
        if suffix.is_empty()
            || !suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(HookError::config(
                format!(
                    "Invalid data_attribute: {attribute:?}. Must look like data-chart-data"
                ),
                "dataAttribute",
            ));
        }
        Ok(())
    }

    fn validate_presentation(presentation: &PresentationOptions) -> HookResult<()> {
        if !TOOLTIP_MODES.contains(&presentation.tooltip_mode.as_str()) {
            return Err(HookError::config(
                format!(
                    "Invalid tooltip mode: {}. Must be one of {}",
                    presentation.tooltip_mode,
                    TOOLTIP_MODES.join(", ")
                ),
                "presentation.tooltipMode",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = HookConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = HookConfig::from_json(
            r#"{"logLevel":"debug","presentation":{"title":"Weekly Sales"}}"#,
        )
        .unwrap();

        assert_eq!(config.hook_name, "ChartHook");
        assert_eq!(config.data_attribute, "data-chart-data");
        assert_eq!(config.presentation.title, "Weekly Sales");
        assert_eq!(config.presentation.y_axis_title, "Value");
        assert!(config.presentation.begin_at_zero);
    }

    #[test]
    fn test_rejects_invalid_fields() {
        let cases = [
            (r#"{"hookName":"Chart Hook"}"#, "hookName"),
            (r#"{"hookName":""}"#, "hookName"),
            (r#"{"dataAttribute":"chart-data"}"#, "dataAttribute"),
            (r#"{"dataAttribute":"data-chartData"}"#, "dataAttribute"),
            (r#"{"socketPath":"live"}"#, "socketPath"),
            (r#"{"logLevel":"loud"}"#, "logLevel"),
            (
                r#"{"presentation":{"tooltipMode":"hover"}}"#,
                "presentation.tooltipMode",
            ),
        ];

        for (json, expected) in cases {
            match HookConfig::from_json(json) {
                Err(HookError::InvalidConfig { field, .. }) => {
                    assert_eq!(field.as_deref(), Some(expected), "config {json}")
                }
                other => panic!("expected InvalidConfig for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unparseable_config() {
        match HookConfig::from_json("not json") {
            Err(HookError::InvalidConfig { field, .. }) => assert!(field.is_none()),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}
