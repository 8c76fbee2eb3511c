mod kv;
mod study_store;

pub use kv::{
    FileStore, KeyValueStore, MemoryStore, Result, StorageError, DECKS_KEY, USER_STATS_KEY,
    USER_TARGETS_KEY,
};
pub use study_store::{CreateDeckRequest, StudyStore};
