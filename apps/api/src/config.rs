use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Public résumé spreadsheet used when `SPREADSHEET_ID` is not set.
pub const DEFAULT_SPREADSHEET_ID: &str = "1OppbWzvUt7g5owjf8HZearJDm0wzNHlN";
const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub sheets_base_url: String,
    pub fetch_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let spreadsheet_id = var("SPREADSHEET_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.spreadsheet_id);
        if !is_valid_spreadsheet_id(&spreadsheet_id) {
            bail!("SPREADSHEET_ID '{spreadsheet_id}' contains characters not allowed in a sheet id");
        }

        let fetch_timeout = match var("SHEET_FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("SHEET_FETCH_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("SHEET_FETCH_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.fetch_timeout,
        };

        Ok(Config {
            spreadsheet_id,
            sheets_base_url: var("SHEETS_BASE_URL").unwrap_or(defaults.sheets_base_url),
            fetch_timeout,
            port: match var("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

/// Sheet ids are URL path segments made of letters, digits, `-` and `_`.
fn is_valid_spreadsheet_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
