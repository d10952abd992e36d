pub mod expansion;
pub mod format;
pub mod language;
pub mod lesson_filter;
pub mod lesson_view;
pub mod search;
pub mod speech;
pub mod types;
