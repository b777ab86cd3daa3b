//! Configuration module for the EMIS forms crate.
//!
//! All configuration is loaded from environment variables. Backend
//! credentials are never embedded in source.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backend platform
    pub backend_url: String,
    /// Anonymous API key for the backend
    pub api_key: String,
    /// Object-storage bucket for school photos
    pub photo_bucket: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `EMIS_BACKEND_URL` and `EMIS_API_KEY` are required; the photo bucket
    /// and log level have defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url = env::var("EMIS_BACKEND_URL").expect("EMIS_BACKEND_URL is not set");

        let api_key = env::var("EMIS_API_KEY").expect("EMIS_API_KEY is not set");

        let photo_bucket =
            env::var("EMIS_PHOTO_BUCKET").unwrap_or_else(|_| "school-photos".to_string());

        let log_level = env::var("EMIS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            backend_url,
            api_key,
            photo_bucket,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        env::set_var("EMIS_BACKEND_URL", "https://example.supabase.co");
        env::set_var("EMIS_API_KEY", "test-anon-key");
        env::remove_var("EMIS_PHOTO_BUCKET");
        env::remove_var("EMIS_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.backend_url, "https://example.supabase.co");
        assert_eq!(config.api_key, "test-anon-key");
        assert_eq!(config.photo_bucket, "school-photos");
        assert_eq!(config.log_level, "info");
    }
}
