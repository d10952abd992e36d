use boli_types::{LanguageCode, ResourceRef};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid resource URL: {0}")]
    InvalidUrl(String),
}

/// Lesson data could not be loaded for a language
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("{resource} not found for {language}: {source}")]
    ResourceFetch {
        resource: ResourceRef,
        language: LanguageCode,
        source: FetchError,
    },

    #[error("{resource} for {language} is malformed: {source}")]
    Malformed {
        resource: ResourceRef,
        language: LanguageCode,
        source: serde_json::Error,
    },
}

impl LessonError {
    pub fn resource(&self) -> &ResourceRef {
        match self {
            LessonError::ResourceFetch { resource, .. } => resource,
            LessonError::Malformed { resource, .. } => resource,
        }
    }
}
