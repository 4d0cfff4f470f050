pub mod csv_export;
pub mod persistence;
pub mod storage;

pub use persistence::{load_state, save_state, STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
