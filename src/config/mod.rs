use std::{env, time::Duration};

use tracing::{info, warn};
use url::Url;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;
const PLACEHOLDER_MARKER: &str = "YOUR_SUPABASE";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub store: Option<StoreSettings>,
    pub store_timeout: Duration,
}

/// Credentials for the hosted store. The URL always ends in `/` so table
/// paths can be joined onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub url: Url,
    pub key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| {
            info!("SERVER_ADDR not set, using default: {DEFAULT_SERVER_ADDR}");
            DEFAULT_SERVER_ADDR.to_string()
        });

        let store_timeout = match lookup("STORE_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        value = %raw,
                        "Invalid STORE_TIMEOUT_SECS, using default: {DEFAULT_STORE_TIMEOUT_SECS}"
                    );
                    Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS)
                }
            },
        };

        let store = StoreSettings::from_parts(lookup("SUPABASE_URL"), lookup("SUPABASE_KEY"));
        if store.is_none() {
            warn!(
                "Supabase credentials not found or are placeholders. Database features will not work."
            );
        }

        Self {
            server_addr,
            store,
            store_timeout,
        }
    }
}

impl StoreSettings {
    pub fn from_parts(url: Option<String>, key: Option<String>) -> Option<Self> {
        let url = usable(url)?;
        let key = usable(key)?;

        let mut url = match Url::parse(&url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => u,
            Ok(u) => {
                warn!(scheme = u.scheme(), "SUPABASE_URL must be http or https");
                return None;
            }
            Err(e) => {
                warn!("Invalid SUPABASE_URL: {e}");
                return None;
            }
        };
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Some(Self { url, key })
    }
}

fn usable(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.contains(PLACEHOLDER_MARKER))
}
