use std::env;

use serde::{Deserialize, Serialize};

use self::assets::AssetsConfig;
use self::search::SearchConfig;
use self::speech::SpeechConfig;
use self::storage::StorageConfig;

pub mod assets;
pub mod search;
pub mod speech;
pub mod storage;

fn default_language() -> String {
    "marathi".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub assets: AssetsConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
    pub speech: SpeechConfig,

    /// Language used when the stored or requested one is unknown
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Event channel capacity between the UI shell and the app
    pub channel_capacity: usize,
}

impl Config {
    /// Build from environment variables (a `.env` file is honoured)
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let default_language =
            env::var("BOLI_DEFAULT_LANGUAGE").unwrap_or_else(|_| default_language());

        let channel_capacity = env::var("BOLI_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            assets: AssetsConfig::new(),
            search: SearchConfig::default(),
            storage: StorageConfig::new(),
            speech: SpeechConfig::default(),

            default_language,
            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assets: AssetsConfig::default(),
            search: SearchConfig::default(),
            storage: StorageConfig::default(),
            speech: SpeechConfig::default(),

            default_language: default_language(),
            channel_capacity: 64,
        }
    }
}
