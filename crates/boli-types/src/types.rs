use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable key of a phrase category, distinct from its display name
pub type CategoryId = String;

/// Identifier of a supported language ("marathi", "gujarati", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A single phrase with its translation.
///
/// `target_text` doubles as the identity key for bookmarks. Field names on
/// the wire follow the bundled phrase tables (`en`, `mr`, `roman`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    #[serde(rename = "en")]
    pub source_text: String,
    #[serde(rename = "mr")]
    pub target_text: String,
    #[serde(rename = "roman")]
    pub romanization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PhraseEntry {
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        romanization: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            romanization: romanization.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Uncategorized vocabulary item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(rename = "en")]
    pub source_text: String,
    #[serde(rename = "mr")]
    pub target_text: String,
    #[serde(rename = "roman")]
    pub romanization: String,
}

impl DictionaryEntry {
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        romanization: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            romanization: romanization.into(),
        }
    }
}

impl From<DictionaryEntry> for PhraseEntry {
    fn from(entry: DictionaryEntry) -> Self {
        Self {
            source_text: entry.source_text,
            target_text: entry.target_text,
            romanization: entry.romanization,
            hint: None,
        }
    }
}

/// Named group of phrases. Phrase order is meaningful: most common first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseCategory {
    pub id: CategoryId,
    pub display_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon_glyph: String,
    pub phrases: Vec<PhraseEntry>,
}

/// Locator of a remotely fetched JSON resource, relative to the asset root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_chapters_ref() -> ResourceRef {
    ResourceRef::new("data.json")
}

fn default_structure_ref() -> ResourceRef {
    ResourceRef::new("lessons_structure.json")
}

/// Everything bundled for one target language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: LanguageCode,
    pub display_name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub script_font: String,
    pub speech_locale: String,
    #[serde(default)]
    pub has_lessons: bool,
    #[serde(default)]
    pub data_source: String,
    pub categories: IndexMap<CategoryId, PhraseCategory>,
    #[serde(default)]
    pub dictionary: Vec<DictionaryEntry>,
    #[serde(default = "default_chapters_ref")]
    pub chapters_ref: ResourceRef,
    #[serde(default = "default_structure_ref")]
    pub structure_ref: ResourceRef,
}

impl Language {
    pub fn category(&self, id: &str) -> Option<&PhraseCategory> {
        self.categories.get(id)
    }

    pub fn phrase(&self, category_id: &str, index: usize) -> Option<&PhraseEntry> {
        self.category(category_id)?.phrases.get(index)
    }
}

/// One hit of a free-text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchResult {
    CategoryPhrase {
        category_id: CategoryId,
        index: usize,
        entry: PhraseEntry,
    },
    Dictionary {
        index: usize,
        entry: DictionaryEntry,
    },
}

impl SearchResult {
    pub fn source_text(&self) -> &str {
        match self {
            SearchResult::CategoryPhrase { entry, .. } => &entry.source_text,
            SearchResult::Dictionary { entry, .. } => &entry.source_text,
        }
    }

    pub fn target_text(&self) -> &str {
        match self {
            SearchResult::CategoryPhrase { entry, .. } => &entry.target_text,
            SearchResult::Dictionary { entry, .. } => &entry.target_text,
        }
    }

    /// Bookmark-shaped copy of the hit
    pub fn to_phrase(&self) -> PhraseEntry {
        match self {
            SearchResult::CategoryPhrase { entry, .. } => entry.clone(),
            SearchResult::Dictionary { entry, .. } => entry.clone().into(),
        }
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, SearchResult::Dictionary { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Paragraph,
    Heading2,
    Heading3,
    Heading4,
}

impl BlockTag {
    pub fn element(&self) -> &'static str {
        match self {
            BlockTag::Paragraph => "p",
            BlockTag::Heading2 => "h2",
            BlockTag::Heading3 => "h3",
            BlockTag::Heading4 => "h4",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BlockTag::Paragraph => "chapter-para",
            BlockTag::Heading2 => "chapter-h2",
            BlockTag::Heading3 => "chapter-h3",
            BlockTag::Heading4 => "chapter-h4",
        }
    }
}

/// Formatted block of lesson content. `text` is already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBlock {
    pub tag: BlockTag,
    pub text: String,
}

impl RenderBlock {
    pub fn to_html(&self) -> String {
        let element = self.tag.element();
        format!(
            "<{element} class=\"{}\">{}</{element}>",
            self.tag.class(),
            self.text
        )
    }
}
