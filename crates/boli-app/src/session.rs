use std::sync::Arc;

use boli_core::expansion::ExpansionState;
use boli_core::language::twemoji_url;
use boli_core::lesson_filter::filter_and_reconcile;
use boli_core::lesson_view::{LessonListView, build_lesson_view};
use boli_core::search::{filter_dictionary, search_with_limit, similar_phrases};
use boli_core::types::{CategoryView, LanguageSummary, Marked, PhraseDetail};
use boli_lessons::LessonLoader;
use boli_store::{BookmarkStore, KeyValueStore, StoreError, ToggleOutcome};
use boli_types::{CategoryId, ChapterId, DictionaryEntry, Language, PhraseEntry, SearchResult};

/// Everything that belongs to the active language.
///
/// A language switch builds a new session; nothing carries over except what
/// the loader keeps in its own cache.
pub struct Session {
    language: Arc<Language>,
    expansion: ExpansionState,
    bookmarks: BookmarkStore,
    lesson_query: String,
}

impl Session {
    pub fn open(language: Arc<Language>, store: Arc<dyn KeyValueStore>) -> Self {
        let bookmarks = BookmarkStore::open(store, language.code.clone());
        Self {
            language,
            expansion: ExpansionState::new(),
            bookmarks,
            lesson_query: String::new(),
        }
    }

    pub fn language(&self) -> &Arc<Language> {
        &self.language
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn summary(&self) -> LanguageSummary {
        LanguageSummary {
            code: self.language.code.clone(),
            display_name: self.language.display_name.clone(),
            subtitle: self.language.subtitle.clone(),
            script_font: self.language.script_font.clone(),
            has_lessons: self.language.has_lessons,
        }
    }

    /// Category cards in table order, icons resolved against `twemoji_cdn`
    pub fn categories(&self, twemoji_cdn: &str) -> Vec<CategoryView> {
        self.language
            .categories
            .values()
            .map(|category| CategoryView {
                id: category.id.clone(),
                display_name: category.display_name.clone(),
                color: category.color.clone(),
                icon_url: twemoji_url(&category.icon_glyph, twemoji_cdn),
                phrases: category
                    .phrases
                    .iter()
                    .map(|entry| Marked {
                        saved: self.bookmarks.is_saved(entry),
                        item: entry.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// `None` for a blank query, which means leave search mode
    pub fn search(&self, query: &str, limit: usize) -> Option<Vec<Marked<SearchResult>>> {
        if query.trim().is_empty() {
            return None;
        }

        let results = search_with_limit(
            query,
            &self.language.categories,
            &self.language.dictionary,
            limit,
        );

        Some(
            results
                .into_iter()
                .map(|result| {
                    let saved = self.bookmarks.contains(result.target_text());
                    Marked {
                        item: result,
                        saved,
                    }
                })
                .collect(),
        )
    }

    pub fn dictionary(&self, query: &str) -> Vec<Marked<DictionaryEntry>> {
        filter_dictionary(query, &self.language.dictionary)
            .into_iter()
            .map(|entry| Marked {
                saved: self.bookmarks.contains(&entry.target_text),
                item: entry.clone(),
            })
            .collect()
    }

    /// Returns the category left expanded, if any
    pub fn toggle_category(&mut self, id: &str) -> Option<CategoryId> {
        if self.language.category(id).is_none() {
            tracing::warn!("Unknown category {} for {}", id, self.language.code);
            return self.expansion.expanded_category().map(str::to_string);
        }

        self.expansion.toggle_category(id);
        self.expansion.expanded_category().map(str::to_string)
    }

    pub fn phrase_detail(
        &self,
        category_id: &str,
        index: usize,
        similar_count: usize,
    ) -> Option<PhraseDetail> {
        let category = self.language.category(category_id)?;
        let entry = category.phrases.get(index)?;

        let similar = similar_phrases(category, index, similar_count)
            .into_iter()
            .map(|(i, phrase)| (i, phrase.clone()))
            .collect();

        Some(PhraseDetail {
            category_id: category_id.to_string(),
            index,
            entry: entry.clone(),
            saved: self.bookmarks.is_saved(entry),
            similar,
        })
    }

    pub fn saved(&self) -> &[PhraseEntry] {
        self.bookmarks.saved()
    }

    pub fn toggle_save(&mut self, entry: &PhraseEntry) -> Result<ToggleOutcome, StoreError> {
        self.bookmarks.toggle_save(entry)
    }

    pub fn remove_saved(&mut self, index: usize) -> Result<Option<PhraseEntry>, StoreError> {
        self.bookmarks.remove_at(index)
    }

    pub fn set_lesson_query(&mut self, query: String) {
        self.lesson_query = query;
    }

    pub fn toggle_major_lesson(&mut self, name: &str) -> bool {
        self.expansion.toggle_major_lesson(name)
    }

    pub fn toggle_chapter(&mut self, id: ChapterId) -> bool {
        self.expansion.toggle_chapter(id)
    }

    /// Filter the cached outline with the current lesson query, closing
    /// whatever the filter hid
    pub fn lesson_view(&mut self, loader: &LessonLoader) -> LessonListView {
        let Some(cache) = loader.cache_for(&self.language.code) else {
            return LessonListView::Empty;
        };

        let visible = filter_and_reconcile(
            &self.lesson_query,
            cache.structure(),
            cache.chapters(),
            &mut self.expansion,
        );
        build_lesson_view(&visible, cache.chapters(), &self.expansion)
    }
}
