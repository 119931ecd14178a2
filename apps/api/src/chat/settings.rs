//! Widget state and per-request sampling parameters.
//!
//! Settings are session-scoped and updated from the page's widgets; the
//! per-request `RequestConfig` is derived fresh for every completion call,
//! with numeric values clamped so out-of-range slider values can never reach
//! the completion endpoint.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The enumerated model set offered by the page's selector.
pub const SUPPORTED_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "openai/gpt-oss-120b",
    "qwen/qwen3-32b",
];

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

pub const TEMPERATURE_MIN: f32 = 0.0;
pub const TEMPERATURE_MAX: f32 = 1.0;

pub const MAX_TOKENS_MIN: u32 = 20;
pub const MAX_TOKENS_MAX: u32 = 300;

/// Current widget values for one session.
/// `dark_mode` is visual only — echoed back to the page, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub dark_mode: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.5,
            max_tokens: 300,
            dark_mode: false,
        }
    }
}

/// Partial settings update from `PATCH /api/v1/sessions/:id/settings`.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub dark_mode: Option<bool>,
}

/// Sampling parameters for a single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SessionSettings {
    /// Derives the sampling parameters for one request, clamped to the
    /// ranges the completion endpoint accepts.
    pub fn request_config(&self) -> RequestConfig {
        RequestConfig {
            model: self.model.clone(),
            temperature: clamp_temperature(self.temperature),
            max_tokens: clamp_max_tokens(self.max_tokens),
        }
    }

    /// Applies a partial update. Numeric values are clamped; a model outside
    /// the enumerated set is rejected.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), AppError> {
        if let Some(model) = update.model {
            if !SUPPORTED_MODELS.contains(&model.as_str()) {
                return Err(AppError::Validation(format!(
                    "Unknown model '{model}'; supported models: {}",
                    SUPPORTED_MODELS.join(", ")
                )));
            }
            self.model = model;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = clamp_temperature(temperature);
        }
        if let Some(max_tokens) = update.max_tokens {
            self.max_tokens = clamp_max_tokens(max_tokens);
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        Ok(())
    }
}

pub fn clamp_temperature(value: f32) -> f32 {
    value.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX)
}

pub fn clamp_max_tokens(value: u32) -> u32 {
    value.clamp(MAX_TOKENS_MIN, MAX_TOKENS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SessionSettings::default();
        assert_eq!(settings.model, "llama-3.3-70b-versatile");
        assert!((settings.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(settings.max_tokens, 300);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_clamp_temperature_bounds() {
        assert_eq!(clamp_temperature(-0.3), 0.0);
        assert_eq!(clamp_temperature(1.7), 1.0);
        assert_eq!(clamp_temperature(0.5), 0.5);
    }

    #[test]
    fn test_clamp_max_tokens_bounds() {
        assert_eq!(clamp_max_tokens(0), 20);
        assert_eq!(clamp_max_tokens(19), 20);
        assert_eq!(clamp_max_tokens(301), 300);
        assert_eq!(clamp_max_tokens(5000), 300);
        assert_eq!(clamp_max_tokens(150), 150);
    }

    #[test]
    fn test_request_config_clamps_out_of_range_values() {
        let settings = SessionSettings {
            model: DEFAULT_MODEL.to_string(),
            temperature: 3.0,
            max_tokens: 10_000,
            dark_mode: false,
        };

        let config = settings.request_config();
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_apply_clamps_slider_values() {
        let mut settings = SessionSettings::default();
        settings
            .apply(SettingsUpdate {
                temperature: Some(2.5),
                max_tokens: Some(5),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.temperature, 1.0);
        assert_eq!(settings.max_tokens, 20);
    }

    #[test]
    fn test_apply_rejects_unknown_model() {
        let mut settings = SessionSettings::default();
        let err = settings
            .apply(SettingsUpdate {
                model: Some("gpt-99-experimental".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(settings.model, DEFAULT_MODEL); // unchanged
    }

    #[test]
    fn test_apply_accepts_supported_model_and_dark_mode() {
        let mut settings = SessionSettings::default();
        settings
            .apply(SettingsUpdate {
                model: Some("qwen/qwen3-32b".to_string()),
                dark_mode: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.model, "qwen/qwen3-32b");
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_apply_partial_update_leaves_other_fields() {
        let mut settings = SessionSettings::default();
        settings
            .apply(SettingsUpdate {
                temperature: Some(0.8),
                ..Default::default()
            })
            .unwrap();

        assert!((settings.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_tokens, 300);
    }
}
