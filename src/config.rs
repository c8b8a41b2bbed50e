use std::env;
use std::time::Duration;

use crate::constants::DXY_DASHBOARD_URL;
use crate::license::Language;

#[derive(Debug, Clone)]
pub struct Config {
    /// Page the snapshots are scraped from.
    pub source_url: String,
    pub host: String,
    pub port: u16,
    pub banner_language: Language,
    pub check_connectivity: bool,
    pub connectivity_timeout: Duration,
}

impl Config {
    const DEFAULT_PORT: u16 = 4000;
    const DEFAULT_CONNECTIVITY_TIMEOUT_SECS: u64 = 2;

    /// Read settings from the process environment. `.env` must already be loaded, see [`load_dotenv`].
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let source_url = lookup("COVID_SOURCE_URL").unwrap_or_else(|| DXY_DASHBOARD_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(v) => v.parse::<u16>().map_err(|e| format!("Invalid PORT: {}", e))?,
            None => Self::DEFAULT_PORT,
        };

        let banner_language = match lookup("BANNER_LANG") {
            Some(v) => v.parse::<Language>()?,
            None => Language::default(),
        };

        let check_connectivity = match lookup("CHECK_CONNECTIVITY") {
            Some(v) => v
                .parse::<bool>()
                .map_err(|_| "CHECK_CONNECTIVITY must be true or false".to_string())?,
            None => true,
        };

        let connectivity_timeout = match lookup("CONNECTIVITY_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|_| "CONNECTIVITY_TIMEOUT_SECS must be a valid number".to_string())?,
            None => Self::DEFAULT_CONNECTIVITY_TIMEOUT_SECS,
        };

        Ok(Self {
            source_url,
            host,
            port,
            banner_language,
            check_connectivity,
            connectivity_timeout: Duration::from_secs(connectivity_timeout),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `.env` into the process environment. A missing file is not an error.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
