//! Runtime configuration loaded from `.env` and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use comment_client::FetchTimeouts;

use super::defaults::get_default;
use super::validation::validate_setting;

/// Runtime configuration for the comments command.
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub legacy_url: String,
    pub tree_url: String,
    pub connect_timeout: Duration,
    pub transfer_timeout: Duration,
    pub request_timeout: Duration,
    pub max_search_results: usize,
    pub item_db_path: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl BotConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn load() -> Self {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key source. Missing or invalid
    /// values fall back to their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            if let Some(value) = get(key).filter(|v| !v.trim().is_empty()) {
                match validate_setting(key, &value) {
                    Ok(()) => return value.trim().to_string(),
                    Err(e) => tracing::warn!("Ignoring invalid {key}={value:?}: {e}"),
                }
            }
            get_default(key).unwrap_or_default().to_string()
        };
        let secs = |key: &str| Duration::from_secs(parse_u64(&g(key), 5));

        let connect_timeout = secs("CONNECT_TIMEOUT_SECS");
        let mut request_timeout = secs("REQUEST_TIMEOUT_SECS");
        if request_timeout < connect_timeout {
            tracing::warn!(
                "REQUEST_TIMEOUT_SECS ({}s) is shorter than CONNECT_TIMEOUT_SECS ({}s), raising it",
                request_timeout.as_secs(),
                connect_timeout.as_secs()
            );
            request_timeout = connect_timeout;
        }

        Self {
            legacy_url: g("LEGACY_COMMENTS_URL"),
            tree_url: g("TREE_COMMENTS_URL"),
            connect_timeout,
            transfer_timeout: secs("TRANSFER_TIMEOUT_SECS"),
            request_timeout,
            max_search_results: parse_u64(&g("MAX_SEARCH_RESULTS"), 40) as usize,
            item_db_path: {
                let path = g("ITEM_DB_PATH");
                if path.is_empty() {
                    data_dir(&get).join("items.db")
                } else {
                    PathBuf::from(path)
                }
            },
        }
    }

    pub fn fetch_timeouts(&self) -> FetchTimeouts {
        FetchTimeouts {
            connect: self.connect_timeout,
            transfer: self.transfer_timeout,
            overall: self.request_timeout,
        }
    }
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

/// Determine the data directory for the application.
fn data_dir(get: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = get("COMMENTS_BOT_DATA_DIR").filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".comments-bot")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
