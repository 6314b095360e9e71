use std::env;
use std::time::Duration;

use chrono_tz::Tz;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub tts_api_key: String,
    pub tts_voice_id: String,
    pub crm_api_key: String,
    pub crm_location_id: String,
    pub crm_calendar_id: String,
    pub default_timezone: Tz,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            tts_api_key: env::var("ELEVENLABS_API_KEY").unwrap_or_default(),
            tts_voice_id: env::var("ELEVENLABS_VOICE_ID").unwrap_or_default(),
            crm_api_key: env::var("GHL_API_KEY").unwrap_or_default(),
            crm_location_id: env::var("GHL_LOCATION_ID").unwrap_or_default(),
            crm_calendar_id: env::var("GHL_CALENDAR_ID").unwrap_or_default(),
            default_timezone: env::var("DEFAULT_TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::America::Chicago),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Checked per request, before any network call is attempted.
    pub fn require_tts(&self) -> Result<(), AppError> {
        if self.tts_api_key.is_empty() {
            return Err(AppError::Config(
                "ElevenLabs API key not configured".to_string(),
            ));
        }
        if self.tts_voice_id.is_empty() {
            return Err(AppError::Config(
                "ElevenLabs voice ID not configured".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_crm(&self) -> Result<(), AppError> {
        if self.crm_api_key.is_empty()
            || self.crm_location_id.is_empty()
            || self.crm_calendar_id.is_empty()
        {
            return Err(AppError::Config(
                "GoHighLevel API configuration incomplete".to_string(),
            ));
        }
        Ok(())
    }
}
