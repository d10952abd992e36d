use std::env;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".boli".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let dir = env::var("BOLI_STORAGE_DIR").unwrap_or_else(|_| default_dir());

        Self { dir }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
