use boli_types::{ChapterIndex, LessonStructure, MajorLesson, SubLesson};

use crate::expansion::ExpansionState;

/// Major lessons with at least one matching sub-lesson, each carrying only
/// its matching sub-lessons. A blank query keeps the outline as is.
pub fn filter_major_lessons(
    query: &str,
    structure: &LessonStructure,
    chapters: &ChapterIndex,
) -> Vec<MajorLesson> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return structure.major_lessons.clone();
    }

    let visible: Vec<MajorLesson> = structure
        .major_lessons
        .iter()
        .filter_map(|major| {
            let sublessons: Vec<SubLesson> = major
                .sublessons
                .iter()
                .filter(|sub| sublesson_matches(sub, &needle, chapters))
                .cloned()
                .collect();

            (!sublessons.is_empty()).then(|| MajorLesson {
                name: major.name.clone(),
                sublessons,
            })
        })
        .collect();

    tracing::debug!(
        "Lesson filter '{}': {} of {} major lessons",
        needle,
        visible.len(),
        structure.major_lessons.len()
    );

    visible
}

/// Filter, then close whatever the filter hid
pub fn filter_and_reconcile(
    query: &str,
    structure: &LessonStructure,
    chapters: &ChapterIndex,
    expansion: &mut ExpansionState,
) -> Vec<MajorLesson> {
    let visible = filter_major_lessons(query, structure, chapters);
    expansion.reconcile(&visible);
    visible
}

/// `needle` is already lowercased. Unlinked sub-lessons match on title only.
fn sublesson_matches(sub: &SubLesson, needle: &str, chapters: &ChapterIndex) -> bool {
    if sub.title.to_lowercase().contains(needle) {
        return true;
    }

    match sub.chapter_id.and_then(|id| chapters.get(&id)) {
        Some(chapter) => {
            chapter.title.to_lowercase().contains(needle)
                || chapter.content.to_lowercase().contains(needle)
        }
        None => false,
    }
}
