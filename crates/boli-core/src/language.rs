use std::sync::Arc;

use boli_types::{Language, LanguageCode};
use indexmap::IndexMap;

/// Source of the bundled, read-only language tables
pub trait DataProvider: Send + Sync {
    /// Supported languages, in display order
    fn languages(&self) -> Vec<LanguageCode>;

    fn language(&self, code: &LanguageCode) -> Option<Arc<Language>>;

    /// Used when no language, or an unknown one, is requested
    fn default_language(&self) -> LanguageCode;

    fn resolve(&self, code: Option<&LanguageCode>) -> Option<Arc<Language>> {
        code.and_then(|code| self.language(code))
            .or_else(|| self.language(&self.default_language()))
    }
}

/// In-memory provider over already parsed languages
pub struct BundledProvider {
    languages: IndexMap<LanguageCode, Arc<Language>>,
    default_language: LanguageCode,
}

impl BundledProvider {
    pub fn new(default_language: impl Into<LanguageCode>) -> Self {
        Self {
            languages: IndexMap::new(),
            default_language: default_language.into(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages
            .insert(language.code.clone(), Arc::new(language));
        self
    }
}

impl DataProvider for BundledProvider {
    fn languages(&self) -> Vec<LanguageCode> {
        self.languages.keys().cloned().collect()
    }

    fn language(&self, code: &LanguageCode) -> Option<Arc<Language>> {
        self.languages.get(code).cloned()
    }

    fn default_language(&self) -> LanguageCode {
        self.default_language.clone()
    }
}

/// Twemoji asset URL for an icon glyph: code points in hex, joined by `-`
pub fn twemoji_url(glyph: &str, cdn: &str) -> Option<String> {
    let glyph = glyph.trim();
    if glyph.is_empty() {
        return None;
    }

    let code_points: Vec<String> = glyph.chars().map(|c| format!("{:x}", c as u32)).collect();
    Some(format!(
        "{}/{}.png",
        cdn.trim_end_matches('/'),
        code_points.join("-")
    ))
}
