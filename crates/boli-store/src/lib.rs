mod bookmarks;
mod error;
mod keyed;
mod preference;

pub use bookmarks::{BookmarkStore, ToggleOutcome};
pub use error::StoreError;
pub use keyed::{JsonFileStore, KeyValueStore, MemoryStore, StorageKey};
pub use preference::LanguagePreference;
