use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_rate() -> f32 {
    0.85
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Utterance rate handed to the speech engine
    #[serde(default = "default_rate")]
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            rate: default_rate(),
        }
    }
}
