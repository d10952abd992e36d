use boli_types::{CategoryId, ChapterId, MajorLesson};
use serde::Serialize;

/// Which category, major lesson and chapter are open.
///
/// Each level is a single slot, so opening one entry closes its sibling.
/// A chapter is only meaningful while its major lesson is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionState {
    expanded_category: Option<CategoryId>,
    expanded_major_lesson: Option<String>,
    expanded_chapter: Option<ChapterId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded_category(&self) -> Option<&str> {
        self.expanded_category.as_deref()
    }

    pub fn expanded_major_lesson(&self) -> Option<&str> {
        self.expanded_major_lesson.as_deref()
    }

    pub fn expanded_chapter(&self) -> Option<ChapterId> {
        self.expanded_chapter
    }

    /// Returns whether the category is open afterwards
    pub fn toggle_category(&mut self, id: &str) -> bool {
        if self.expanded_category.as_deref() == Some(id) {
            self.expanded_category = None;
            false
        } else {
            self.expanded_category = Some(id.to_string());
            true
        }
    }

    /// Returns whether the major lesson is open afterwards. Any open chapter
    /// is closed either way.
    pub fn toggle_major_lesson(&mut self, name: &str) -> bool {
        self.expanded_chapter = None;

        if self.expanded_major_lesson.as_deref() == Some(name) {
            self.expanded_major_lesson = None;
            false
        } else {
            self.expanded_major_lesson = Some(name.to_string());
            true
        }
    }

    /// Callers only pass chapters belonging to the open major lesson
    pub fn toggle_chapter(&mut self, id: ChapterId) -> bool {
        if self.expanded_chapter == Some(id) {
            self.expanded_chapter = None;
            false
        } else {
            self.expanded_chapter = Some(id);
            true
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop expansion that points outside the visible lessons
    pub fn reconcile(&mut self, visible: &[MajorLesson]) {
        let Some(major_name) = self.expanded_major_lesson.as_deref() else {
            return;
        };

        match visible.iter().find(|major| major.name == major_name) {
            None => {
                tracing::debug!("Expanded lesson '{}' filtered out, collapsing", major_name);
                self.expanded_major_lesson = None;
                self.expanded_chapter = None;
            }
            Some(major) => {
                if let Some(chapter) = self.expanded_chapter
                    && !major
                        .sublessons
                        .iter()
                        .any(|sub| sub.chapter_id == Some(chapter))
                {
                    self.expanded_chapter = None;
                }
            }
        }
    }
}
