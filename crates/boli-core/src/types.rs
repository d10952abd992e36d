use boli_types::{
    CategoryId, ChapterId, DictionaryEntry, LanguageCode, LessonStatus, PhraseEntry, SearchResult,
};

use serde::{Deserialize, Serialize};

use crate::lesson_view::LessonListView;

/// Requests from the UI shell
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum AppEvent {
    SelectLanguage(LanguageCode),
    /// Back to the language picker; forgets the remembered language
    ChangeLanguage,
    SearchText(String),
    DictionarySearch(String),
    ToggleCategory(CategoryId),
    OpenPhrase {
        category_id: CategoryId,
        index: usize,
    },
    ToggleSave(PhraseEntry),
    RemoveSaved(usize),
    Speak(PhraseEntry),
    OpenLessons,
    LessonSearch(String),
    ToggleMajorLesson(String),
    ToggleChapter(ChapterId),
}

/// Structured output for the render layer
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", content = "payload", rename_all = "snake_case")]
pub enum ViewUpdate {
    LanguageActivated(LanguageSummary),
    LanguagePicker,
    /// The category grid in table order
    Categories {
        categories: Vec<CategoryView>,
        expanded: Option<CategoryId>,
    },
    /// Blank query: leave search mode and show categories
    SearchCleared,
    SearchResults(Vec<Marked<SearchResult>>),
    Dictionary(Vec<Marked<DictionaryEntry>>),
    PhraseDetail(PhraseDetail),
    Saved(Vec<PhraseEntry>),
    LessonStatus(LessonStatus),
    Lessons(LessonListView),
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSummary {
    pub code: LanguageCode,
    pub display_name: String,
    pub subtitle: String,
    pub script_font: String,
    pub has_lessons: bool,
}

/// One category card with its phrase list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub display_name: String,
    pub color: String,
    /// `None` when the category has no icon glyph
    pub icon_url: Option<String>,
    pub phrases: Vec<Marked<PhraseEntry>>,
}

/// An item together with its bookmark state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marked<T> {
    pub item: T,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseDetail {
    pub category_id: CategoryId,
    pub index: usize,
    pub entry: PhraseEntry,
    pub saved: bool,
    pub similar: Vec<(usize, PhraseEntry)>,
}
