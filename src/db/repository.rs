use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::db::store::{KeyValueStore, StoreError, StoreResult};
use crate::journal::LogBook;
use crate::models::Preferences;

pub const KEY_LOGS: &str = "khashi_daily_logs";
pub const KEY_SETTINGS: &str = "khashi_settings";
pub const KEY_LAST_MESSAGE: &str = "khashi_last_msg";
/// Last unreadable value of `KEY_LOGS`, kept before it gets overwritten.
pub const KEY_LOGS_BACKUP: &str = "khashi_daily_logs.bak";

// ─── Daily logs ──────────────────────────────────────────────────────────────

pub struct LogRepo;

impl LogRepo {
    /// Load all stored days. Missing data yields an empty book. Corrupt data
    /// also yields an empty book, after copying the raw text to
    /// `KEY_LOGS_BACKUP`.
    pub fn load(store: &dyn KeyValueStore) -> StoreResult<LogBook> {
        let Some(raw) = store.get(KEY_LOGS)? else {
            return Ok(LogBook::new());
        };
        match serde_json::from_str::<LogBook>(&raw) {
            Ok(book) => {
                debug!("Loaded {} daily logs", book.len());
                Ok(book)
            }
            Err(e) => {
                store.set(KEY_LOGS_BACKUP, &raw)?;
                warn!(
                    "Stored daily logs are unreadable, starting empty (original kept under {}): {}",
                    KEY_LOGS_BACKUP, e
                );
                Ok(LogBook::new())
            }
        }
    }

    pub fn save(store: &dyn KeyValueStore, book: &LogBook) -> StoreResult<()> {
        let json = serde_json::to_string(book).map_err(|source| StoreError::Serialize {
            key: KEY_LOGS,
            source,
        })?;
        store.set(KEY_LOGS, &json)?;
        SyncStub::push(book);
        Ok(())
    }

    /// Stored JSON as-is, for export.
    pub fn raw(store: &dyn KeyValueStore) -> StoreResult<String> {
        Ok(store.get(KEY_LOGS)?.unwrap_or_else(|| "[]".to_string()))
    }
}

// ─── Preferences ─────────────────────────────────────────────────────────────

pub struct PreferencesRepo;

impl PreferencesRepo {
    pub fn load(store: &dyn KeyValueStore) -> StoreResult<Preferences> {
        let Some(raw) = store.get(KEY_SETTINGS)? else {
            return Ok(Preferences::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Stored preferences are unreadable, using defaults: {}", e);
            Preferences::default()
        }))
    }

    pub fn save(store: &dyn KeyValueStore, prefs: &Preferences) -> StoreResult<()> {
        let json = serde_json::to_string(prefs).map_err(|source| StoreError::Serialize {
            key: KEY_SETTINGS,
            source,
        })?;
        store.set(KEY_SETTINGS, &json)
    }
}

// ─── Daily message marker ────────────────────────────────────────────────────

pub struct DailyMessageGate;

impl DailyMessageGate {
    /// True at most once per calendar day, and never while the message is
    /// switched off. Showing the message records today in the marker.
    pub fn should_show(
        store: &dyn KeyValueStore,
        prefs: &Preferences,
        today: NaiveDate,
    ) -> StoreResult<bool> {
        if !prefs.daily_message_enabled {
            return Ok(false);
        }
        let today_str = today.format("%Y-%m-%d").to_string();
        if store.get(KEY_LAST_MESSAGE)?.as_deref() == Some(today_str.as_str()) {
            return Ok(false);
        }
        store.set(KEY_LAST_MESSAGE, &today_str)?;
        Ok(true)
    }
}

// ─── Remote sync ─────────────────────────────────────────────────────────────

/// Placeholder for a remote backup. Only logs.
pub struct SyncStub;

impl SyncStub {
    pub fn push(book: &LogBook) {
        info!("Simulated sync to Google Sheets... ({} days)", book.len());
    }
}
