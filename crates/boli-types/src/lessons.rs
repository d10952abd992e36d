use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(pub u32);

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Long-form lesson content, as listed in the chapter-list resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: String,
}

/// Chapters keyed by id
pub type ChapterIndex = HashMap<ChapterId, Chapter>;

/// Leaf of the lesson outline. A missing chapter link means the content is
/// not written yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubLesson {
    pub title: String,
    #[serde(default)]
    pub chapter_id: Option<ChapterId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorLesson {
    /// Unique within a structure; used as the expansion key
    pub name: String,
    #[serde(default)]
    pub sublessons: Vec<SubLesson>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStructure {
    #[serde(default)]
    pub major_lessons: Vec<MajorLesson>,
}

/// Load state of the lesson data for the active language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum LessonStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
    /// Language ships no lessons
    Unavailable,
}
