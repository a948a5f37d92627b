mod log;
mod store;

pub use log::{HISTORY_CAPACITY, HistoryLog};
pub use store::{FileStore, HistoryStore, MemoryStore};
