pub mod log;
pub mod preferences;
pub mod prayer;

pub use log::{DailyLog, DayState};
pub use preferences::{PreferenceKey, Preferences};
pub use prayer::{clamp_score, PrayerEntry, PrayerName, PrayerPatch, MAX_SCORE};
