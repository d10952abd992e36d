use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_twemoji_cdn() -> String {
    "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/72x72".to_string()
}

/// Where lesson resources and icon assets come from
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AssetsConfig {
    /// Root URL the lesson JSON files are served from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local asset directory; when set, lessons are read from disk instead
    pub local_dir: Option<String>,
    /// Per-request limit for remote lesson fetches
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_twemoji_cdn")]
    pub twemoji_cdn: String,
}

impl AssetsConfig {
    pub fn new() -> Self {
        let base_url = env::var("BOLI_ASSET_BASE_URL").unwrap_or_else(|_| default_base_url());
        let local_dir = env::var("BOLI_ASSET_DIR").ok().filter(|dir| !dir.is_empty());
        let request_timeout_secs = env::var("BOLI_ASSET_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Self {
            base_url,
            local_dir,
            request_timeout_secs,
            twemoji_cdn: default_twemoji_cdn(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            local_dir: None,
            request_timeout_secs: default_timeout_secs(),
            twemoji_cdn: default_twemoji_cdn(),
        }
    }
}
