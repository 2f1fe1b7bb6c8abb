use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PrayerEntry, PrayerName};

/// The five entries of one day. A fixed struct rather than a map, so a day
/// can never hold a partial or extra set of prayers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntries {
    #[serde(rename = "Fajr", default)]
    pub fajr: PrayerEntry,
    #[serde(rename = "Dhuhr", default)]
    pub dhuhr: PrayerEntry,
    #[serde(rename = "Asr", default)]
    pub asr: PrayerEntry,
    #[serde(rename = "Maghrib", default)]
    pub maghrib: PrayerEntry,
    #[serde(rename = "Isha", default)]
    pub isha: PrayerEntry,
}

impl DayEntries {
    pub fn get(&self, name: PrayerName) -> &PrayerEntry {
        match name {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }

    pub fn get_mut(&mut self, name: PrayerName) -> &mut PrayerEntry {
        match name {
            PrayerName::Fajr => &mut self.fajr,
            PrayerName::Dhuhr => &mut self.dhuhr,
            PrayerName::Asr => &mut self.asr,
            PrayerName::Maghrib => &mut self.maghrib,
            PrayerName::Isha => &mut self.isha,
        }
    }

    /// Entries in the fixed daily order.
    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, &PrayerEntry)> {
        PrayerName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|(_, e)| e.completed).count()
    }

    pub fn all_completed(&self) -> bool {
        self.completed_count() == PrayerName::ALL.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(rename = "prayers", default)]
    pub entries: DayEntries,
    #[serde(rename = "isReviewCompleted", default)]
    pub review_completed: bool,
    #[serde(
        rename = "mostKhushuPrayer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub best_prayer: Option<PrayerName>,
}

impl DailyLog {
    /// A fresh day: nothing completed, every score at the floor, times unknown.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: DayEntries::default(),
            review_completed: false,
            best_prayer: None,
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Where a day stands. Derived from the record, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    InProgress,
    AllDone,
    Reviewed,
}

impl DayState {
    pub fn of(log: &DailyLog) -> Self {
        if log.review_completed {
            DayState::Reviewed
        } else if log.entries.all_completed() {
            DayState::AllDone
        } else {
            DayState::InProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayState::InProgress => "in progress",
            DayState::AllDone => "all done, awaiting review",
            DayState::Reviewed => "reviewed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn new_day_has_five_default_entries() {
        let log = DailyLog::new(date());
        assert_eq!(log.entries.iter().count(), 5);
        for (_, entry) in log.entries.iter() {
            assert!(!entry.completed);
            assert_eq!(entry.presence_score, 10);
            assert_eq!(entry.scheduled_time, None);
        }
        assert!(!log.review_completed);
        assert_eq!(log.best_prayer, None);
        assert_eq!(DayState::of(&log), DayState::InProgress);
    }

    #[test]
    fn state_follows_completion_and_review() {
        let mut log = DailyLog::new(date());
        for name in PrayerName::ALL {
            log.entries.get_mut(name).completed = true;
        }
        assert_eq!(DayState::of(&log), DayState::AllDone);

        log.review_completed = true;
        log.best_prayer = Some(PrayerName::Asr);
        assert_eq!(DayState::of(&log), DayState::Reviewed);
    }

    #[test]
    fn wire_format_uses_original_keys() {
        let mut log = DailyLog::new(date());
        log.best_prayer = Some(PrayerName::Fajr);
        log.review_completed = true;
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["date"], "2026-10-14");
        assert_eq!(value["mostKhushuPrayer"], "Fajr");
        assert_eq!(value["isReviewCompleted"], true);
        assert_eq!(value["prayers"]["Maghrib"]["khushu"], 10);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let log: DailyLog = serde_json::from_str(r#"{"date":"2026-10-14"}"#).unwrap();
        assert_eq!(log, DailyLog::new(date()));
    }
}
