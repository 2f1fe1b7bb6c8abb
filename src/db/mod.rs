pub mod migrations;
pub mod repository;
pub mod sqlite;
pub mod store;

pub use repository::{DailyMessageGate, LogRepo, PreferencesRepo};
pub use sqlite::SqliteStore;
pub use store::KeyValueStore;
#[cfg(test)]
pub use store::MemoryStore;
