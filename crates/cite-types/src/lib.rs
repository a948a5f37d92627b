pub mod language;
pub mod record;
pub mod types;

pub use language::{Language, UnknownLanguage};
pub use record::{BookFields, BookRecord, UNKNOWN_FIELD};
pub use types::HistoryEntry;
