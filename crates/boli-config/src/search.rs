use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    15
}

fn default_similar_count() -> usize {
    3
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on merged phrase + dictionary hits
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Related phrases shown next to an opened phrase
    #[serde(default = "default_similar_count")]
    pub similar_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            similar_count: default_similar_count(),
        }
    }
}
