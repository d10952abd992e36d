use std::sync::Arc;

use boli_types::{
    Chapter, ChapterId, ChapterIndex, Language, LanguageCode, LessonStatus, LessonStructure,
    ResourceRef,
};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::LessonError;
use crate::fetch::ResourceFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Language ships no lessons, nothing was fetched
    NoLessons,
    AlreadyLoaded,
    Loaded,
}

/// Lesson data of one language
#[derive(Debug, Clone)]
pub struct LessonCache {
    language: LanguageCode,
    chapters: ChapterIndex,
    structure: LessonStructure,
}

impl LessonCache {
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn chapters(&self) -> &ChapterIndex {
        &self.chapters
    }

    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.get(&id)
    }

    pub fn structure(&self) -> &LessonStructure {
        &self.structure
    }
}

/// Fetches and caches lesson data for the active language.
///
/// Only one language is cached. A language switch marks the cache stale
/// without dropping it; the next load for another language replaces it.
pub struct LessonLoader {
    fetcher: Arc<dyn ResourceFetcher>,
    cache: Option<LessonCache>,
    stale: bool,
    status: Arc<RwLock<LessonStatus>>,
}

impl LessonLoader {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self {
            fetcher,
            cache: None,
            stale: false,
            status: Arc::new(RwLock::new(LessonStatus::Idle)),
        }
    }

    pub async fn status(&self) -> LessonStatus {
        self.status.read().await.clone()
    }

    /// Cached lessons, if they are current for `language`
    pub fn cache_for(&self, language: &LanguageCode) -> Option<&LessonCache> {
        self.cache
            .as_ref()
            .filter(|cache| !self.stale && &cache.language == language)
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub async fn ensure_loaded(&mut self, language: &Language) -> Result<LoadStatus, LessonError> {
        if !language.has_lessons {
            self.set_status(LessonStatus::Unavailable).await;
            return Ok(LoadStatus::NoLessons);
        }

        if self.cache_for(&language.code).is_some() {
            self.set_status(LessonStatus::Loaded).await;
            return Ok(LoadStatus::AlreadyLoaded);
        }

        self.set_status(LessonStatus::Loading).await;
        tracing::info!("Loading lessons for {}", language.code);

        match self.fetch_lessons(language).await {
            Ok(cache) => {
                tracing::info!(
                    "Loaded {} chapters and {} major lessons for {}",
                    cache.chapters.len(),
                    cache.structure.major_lessons.len(),
                    language.code
                );
                self.cache = Some(cache);
                self.stale = false;
                self.set_status(LessonStatus::Loaded).await;
                Ok(LoadStatus::Loaded)
            }
            Err(e) => {
                tracing::error!("Failed to load lessons: {}", e);
                // A stale cache of the same language must not resurface
                if self
                    .cache
                    .as_ref()
                    .is_some_and(|cache| cache.language == language.code)
                {
                    self.cache = None;
                }
                self.set_status(LessonStatus::Failed(e.to_string())).await;
                Err(e)
            }
        }
    }

    /// Both resources are fetched concurrently; the first failure wins
    async fn fetch_lessons(&self, language: &Language) -> Result<LessonCache, LessonError> {
        let (chapters_raw, structure_raw) = tokio::try_join!(
            self.fetch_resource(language, &language.chapters_ref),
            self.fetch_resource(language, &language.structure_ref),
        )?;

        let chapters: Vec<Chapter> = parse(language, &language.chapters_ref, &chapters_raw)?;
        let structure: LessonStructure =
            parse(language, &language.structure_ref, &structure_raw)?;

        let chapters = chapters
            .into_iter()
            .map(|chapter| (chapter.id, chapter))
            .collect();

        Ok(LessonCache {
            language: language.code.clone(),
            chapters,
            structure,
        })
    }

    async fn fetch_resource(
        &self,
        language: &Language,
        resource: &ResourceRef,
    ) -> Result<String, LessonError> {
        self.fetcher
            .fetch(resource)
            .await
            .map_err(|source| LessonError::ResourceFetch {
                resource: resource.clone(),
                language: language.code.clone(),
                source,
            })
    }

    async fn set_status(&self, status: LessonStatus) {
        *self.status.write().await = status;
    }
}

fn parse<T: DeserializeOwned>(
    language: &Language,
    resource: &ResourceRef,
    raw: &str,
) -> Result<T, LessonError> {
    serde_json::from_str(raw).map_err(|source| LessonError::Malformed {
        resource: resource.clone(),
        language: language.code.clone(),
        source,
    })
}
