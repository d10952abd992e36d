mod error;
mod fetch;
mod loader;

pub use error::{FetchError, LessonError};
pub use fetch::{FileFetcher, HttpFetcher, ResourceFetcher};
pub use loader::{LessonCache, LessonLoader, LoadStatus};
