use chrono_tz::Tz;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub base_url: String,
    pub site_name: String,
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "https://sleepstilchristmas.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            env::var("SITE_NAME").unwrap_or_else(|_| "sleeps 'til christmas".to_string());

        // Midnight boundaries for the countdown refresh are computed in this zone
        let timezone = env::var("SITE_TZ")
            .unwrap_or_else(|_| "UTC".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone)?;

        Ok(Config {
            server_host,
            server_port,
            base_url,
            site_name,
            timezone,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("SITE_TZ is not a recognized IANA timezone name")]
    InvalidTimezone,
}
