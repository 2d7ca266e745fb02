//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; there is no runtime reload.

use std::env;

use crate::identity::{IdentityProvider, TelegramIdentity};

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// How the current user's identity is resolved
    pub identity: IdentityProvider,
    /// Offset from UTC (minutes) used for day-boundary streak math.
    /// The Mini App audience is a single school community, so one
    /// configured offset stands in for per-client local time.
    pub utc_offset_minutes: i32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let identity = match env::var("IDENTITY_MODE").as_deref() {
            Ok("fixed-test") => IdentityProvider::FixedTest(TelegramIdentity::test_default()),
            Ok("telegram") | Err(_) => IdentityProvider::Telegram,
            Ok(other) => return Err(ConfigError::Invalid("IDENTITY_MODE", other.to_string())),
        };

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            identity,
            utc_offset_minutes: env::var("UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            identity: IdentityProvider::FixedTest(TelegramIdentity::test_default()),
            utc_offset_minutes: 0,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
