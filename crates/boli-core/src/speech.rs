use boli_types::Language;
use serde::Serialize;

/// Text to speak, handed to the platform's speech engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub locale: String,
    pub rate: f32,
}

impl SpeechRequest {
    /// `None` when there is nothing to say
    pub fn for_text(text: &str, language: &Language, rate: f32) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            locale: language.speech_locale.clone(),
            rate,
        })
    }
}

/// Text-to-speech capability provided by the host
pub trait Speaker: Send + Sync {
    /// Cancel anything playing and speak `request`
    fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech not supported on this device")]
    Unsupported,

    #[error("Speech engine error: {0}")]
    Engine(String),
}
