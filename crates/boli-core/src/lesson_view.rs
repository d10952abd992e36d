use boli_types::{ChapterId, ChapterIndex, MajorLesson, RenderBlock};
use serde::Serialize;

use crate::expansion::ExpansionState;
use crate::format::format;

/// What the lesson tab shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LessonListView {
    /// No outline is loaded
    Empty,
    Lessons(Vec<MajorLessonView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorLessonView {
    pub name: String,
    pub expanded: bool,
    /// Filled only while expanded
    pub sublessons: Vec<SubLessonView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubLessonView {
    pub title: String,
    pub chapter_id: Option<ChapterId>,
    pub body: SubLessonBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubLessonBody {
    /// No chapter behind this sub-lesson yet
    Placeholder,
    Collapsed,
    Expanded { blocks: Vec<RenderBlock>, url: String },
}

impl SubLessonBody {
    pub fn has_content(&self) -> bool {
        !matches!(self, SubLessonBody::Placeholder)
    }
}

pub fn build_lesson_view(
    visible: &[MajorLesson],
    chapters: &ChapterIndex,
    expansion: &ExpansionState,
) -> LessonListView {
    let majors = visible
        .iter()
        .map(|major| {
            let expanded = expansion.expanded_major_lesson() == Some(major.name.as_str());
            let sublessons = if expanded {
                major
                    .sublessons
                    .iter()
                    .map(|sub| {
                        let chapter = sub.chapter_id.and_then(|id| chapters.get(&id));
                        let body = match chapter {
                            None => SubLessonBody::Placeholder,
                            Some(chapter) if expansion.expanded_chapter() == Some(chapter.id) => {
                                SubLessonBody::Expanded {
                                    blocks: format(&chapter.content),
                                    url: chapter.url.clone(),
                                }
                            }
                            Some(_) => SubLessonBody::Collapsed,
                        };

                        SubLessonView {
                            title: sub.title.clone(),
                            chapter_id: sub.chapter_id,
                            body,
                        }
                    })
                    .collect()
            } else {
                Vec::new()
            };

            MajorLessonView {
                name: major.name.clone(),
                expanded,
                sublessons,
            }
        })
        .collect();

    LessonListView::Lessons(majors)
}

#[cfg(test)]
mod tests {
    use boli_types::{Chapter, SubLesson};

    use super::*;

    #[test]
    fn test_expanded_chapter_is_formatted() {
        let visible = vec![
            MajorLesson {
                name: "Basics".to_string(),
                sublessons: vec![
                    SubLesson {
                        title: "Vowels".to_string(),
                        chapter_id: Some(ChapterId(1)),
                    },
                    SubLesson {
                        title: "Soon".to_string(),
                        chapter_id: None,
                    },
                    SubLesson {
                        title: "Dangling".to_string(),
                        chapter_id: Some(ChapterId(99)),
                    },
                ],
            },
            MajorLesson {
                name: "Grammar".to_string(),
                sublessons: vec![],
            },
        ];
        let chapters: ChapterIndex = [(
            ChapterId(1),
            Chapter {
                id: ChapterId(1),
                title: "Swar".to_string(),
                content: "## Vowels\n\nThere are **twelve**.".to_string(),
                url: "https://example.org/1".to_string(),
            },
        )]
        .into_iter()
        .collect();

        let mut expansion = ExpansionState::new();
        expansion.toggle_major_lesson("Basics");

        let LessonListView::Lessons(majors) = build_lesson_view(&visible, &chapters, &expansion) else {
            panic!("expected lessons");
        };
        assert!(majors[0].expanded);
        assert!(!majors[1].expanded);
        assert!(majors[1].sublessons.is_empty());
        assert_eq!(majors[0].sublessons[0].body, SubLessonBody::Collapsed);
        assert_eq!(majors[0].sublessons[1].body, SubLessonBody::Placeholder);
        assert_eq!(majors[0].sublessons[2].body, SubLessonBody::Placeholder);

        expansion.toggle_chapter(ChapterId(1));
        let LessonListView::Lessons(majors) = build_lesson_view(&visible, &chapters, &expansion) else {
            panic!("expected lessons");
        };
        match &majors[0].sublessons[0].body {
            SubLessonBody::Expanded { blocks, url } => {
                assert_eq!(blocks.len(), 2);
                assert_eq!(url, "https://example.org/1");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
