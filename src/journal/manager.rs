//! Daily log bookkeeping.
//!
//! Every operation here is a pure function over a [`LogBook`]: nothing reads
//! the clock or touches storage. Callers pass `today` in and persist whatever
//! comes back.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::models::{DailyLog, DayState, PrayerName, PrayerPatch};

/// Number of daily prayers. The average always divides by this, not by the
/// number of completed prayers.
pub const DAILY_PRAYER_COUNT: f64 = 5.0;

/// All stored days, at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBook {
    days: BTreeMap<NaiveDate, DailyLog>,
}

impl LogBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.days.get(&date)
    }

    /// Replace whatever is stored for the log's date.
    pub fn upsert(&mut self, log: DailyLog) {
        self.days.insert(log.date, log);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DailyLog> {
        self.days.values()
    }
}

impl FromIterator<DailyLog> for LogBook {
    /// Later records win when two share a date.
    fn from_iter<I: IntoIterator<Item = DailyLog>>(iter: I) -> Self {
        let mut book = LogBook::new();
        for log in iter {
            book.upsert(log);
        }
        book
    }
}

// Stored as a plain array of days, oldest first.
impl Serialize for LogBook {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.days.values())
    }
}

impl<'de> Deserialize<'de> for LogBook {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let days = Vec::<DailyLog>::deserialize(d)?;
        Ok(days.into_iter().collect())
    }
}

/// The stored record for `today`, or a fresh default one. Never inserts.
pub fn get_or_create_today(logs: &LogBook, today: NaiveDate) -> DailyLog {
    logs.get(today)
        .cloned()
        .unwrap_or_else(|| DailyLog::new(today))
}

/// Merge `patch` into today's entry for `name`.
///
/// Scores are stored as given; range limits belong to the input control.
pub fn update_prayer(
    logs: &LogBook,
    today: NaiveDate,
    name: PrayerName,
    patch: &PrayerPatch,
) -> LogBook {
    let mut day = get_or_create_today(logs, today);
    day.entries.get_mut(name).apply(patch);

    let mut next = logs.clone();
    next.upsert(day);
    next
}

/// Close today with `best` as the most-present prayer.
///
/// There is no completion guard here: callers check for
/// [`DayState::AllDone`] before offering the review.
pub fn complete_review(logs: &LogBook, today: NaiveDate, best: PrayerName) -> LogBook {
    let mut day = get_or_create_today(logs, today);
    day.review_completed = true;
    day.best_prayer = Some(best);

    let mut next = logs.clone();
    next.upsert(day);
    next
}

/// Sum of completed scores over the fixed five, or 0 when nothing is done.
pub fn daily_average(log: &DailyLog) -> f64 {
    let done: Vec<u8> = log
        .entries
        .iter()
        .filter(|(_, e)| e.completed)
        .map(|(_, e)| e.presence_score)
        .collect();
    if done.is_empty() {
        return 0.0;
    }
    let total: u32 = done.iter().map(|s| *s as u32).sum();
    total as f64 / DAILY_PRAYER_COUNT
}

pub fn day_state(log: &DailyLog) -> DayState {
    DayState::of(log)
}

/// Whether the end-of-day review should be offered.
pub fn review_available(log: &DailyLog) -> bool {
    day_state(log) == DayState::AllDone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerEntry;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn complete_all(mut logs: LogBook, today: NaiveDate, scores: [u8; 5]) -> LogBook {
        for (name, score) in PrayerName::ALL.into_iter().zip(scores) {
            logs = update_prayer(&logs, today, name, &PrayerPatch::mark_done());
            logs = update_prayer(&logs, today, name, &PrayerPatch::score(score));
        }
        logs
    }

    #[test]
    fn first_run_synthesizes_default_day() {
        let logs = LogBook::new();
        let today = get_or_create_today(&logs, day(14));
        assert_eq!(today.date, day(14));
        assert_eq!(today.entries.iter().count(), 5);
        assert!(today.entries.iter().all(|(_, e)| !e.completed));
        assert!(today.entries.iter().all(|(_, e)| e.presence_score == 10));
        assert!(!today.review_completed);
    }

    #[test]
    fn get_or_create_is_idempotent_and_does_not_insert() {
        let logs = LogBook::new();
        let a = get_or_create_today(&logs, day(14));
        let b = get_or_create_today(&logs, day(14));
        assert_eq!(a, b);
        assert!(logs.is_empty());
    }

    #[test]
    fn get_or_create_leaves_other_days_alone() {
        let logs = update_prayer(&LogBook::new(), day(12), PrayerName::Fajr, &PrayerPatch::mark_done());
        let logs = update_prayer(&logs, day(13), PrayerName::Isha, &PrayerPatch::mark_done());
        let before = logs.clone();

        let today = get_or_create_today(&logs, day(14));
        assert_eq!(today, DailyLog::new(day(14)));
        assert_eq!(logs.len(), 2);
        assert!(logs.get(day(14)).is_none());
        assert_eq!(logs, before);
    }

    #[test]
    fn get_or_create_returns_stored_day() {
        let logs = update_prayer(&LogBook::new(), day(14), PrayerName::Asr, &PrayerPatch::mark_done());
        let today = get_or_create_today(&logs, day(14));
        assert!(today.entries.asr.completed);
    }

    #[test]
    fn update_touches_only_the_named_entry() {
        let yesterday = update_prayer(&LogBook::new(), day(13), PrayerName::Fajr, &PrayerPatch::mark_done());
        let before = get_or_create_today(&yesterday, day(14));

        let patch = PrayerPatch {
            completed: Some(true),
            presence_score: Some(80),
            scheduled_time: None,
        };
        let logs = update_prayer(&yesterday, day(14), PrayerName::Maghrib, &patch);
        let after = logs.get(day(14)).unwrap();

        assert_eq!(
            after.entries.maghrib,
            PrayerEntry {
                scheduled_time: None,
                completed: true,
                presence_score: 80,
            }
        );
        for name in PrayerName::ALL.into_iter().filter(|n| *n != PrayerName::Maghrib) {
            assert_eq!(after.entries.get(name), before.entries.get(name));
        }
        assert_eq!(logs.get(day(13)), yesterday.get(day(13)));
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn update_does_not_clamp() {
        let logs = update_prayer(&LogBook::new(), day(14), PrayerName::Isha, &PrayerPatch::score(5));
        assert_eq!(logs.get(day(14)).unwrap().entries.isha.presence_score, 5);
    }

    #[test]
    fn repeated_updates_keep_one_record_per_date() {
        let mut logs = LogBook::new();
        for _ in 0..3 {
            logs = update_prayer(&logs, day(14), PrayerName::Fajr, &PrayerPatch::score(30));
        }
        assert_eq!(logs.len(), 1);
    }

    #[test]
    fn average_is_zero_when_nothing_done() {
        assert_eq!(daily_average(&DailyLog::new(day(14))), 0.0);
    }

    #[test]
    fn average_of_floor_scores() {
        let logs = complete_all(LogBook::new(), day(14), [10; 5]);
        assert_eq!(daily_average(logs.get(day(14)).unwrap()), 10.0);
    }

    #[test]
    fn average_divides_by_five_not_by_done_count() {
        let mut logs = LogBook::new();
        for name in [PrayerName::Fajr, PrayerName::Dhuhr] {
            logs = update_prayer(&logs, day(14), name, &PrayerPatch::mark_done());
            logs = update_prayer(&logs, day(14), name, &PrayerPatch::score(100));
        }
        assert_eq!(daily_average(logs.get(day(14)).unwrap()), 40.0);
    }

    #[test]
    fn scores_of_incomplete_prayers_are_ignored() {
        let logs = update_prayer(&LogBook::new(), day(14), PrayerName::Fajr, &PrayerPatch::score(90));
        assert_eq!(daily_average(logs.get(day(14)).unwrap()), 0.0);
    }

    #[test]
    fn full_day_then_review() {
        let logs = complete_all(LogBook::new(), day(14), [50, 60, 70, 80, 90]);
        let today = logs.get(day(14)).unwrap();
        assert_eq!(daily_average(today), 70.0);
        assert_eq!(day_state(today), DayState::AllDone);
        assert!(review_available(today));

        let logs = complete_review(&logs, day(14), PrayerName::Fajr);
        let today = logs.get(day(14)).unwrap();
        assert_eq!(day_state(today), DayState::Reviewed);
        assert_eq!(today.best_prayer, Some(PrayerName::Fajr));
        assert!(!review_available(today));
    }

    #[test]
    fn review_leaves_other_days_alone() {
        let logs = complete_all(LogBook::new(), day(13), [20; 5]);
        let logs = complete_all(logs, day(14), [30; 5]);
        let reviewed = complete_review(&logs, day(14), PrayerName::Isha);
        assert_eq!(reviewed.get(day(13)), logs.get(day(13)));
        assert!(!reviewed.get(day(13)).unwrap().review_completed);
    }

    #[test]
    fn review_is_not_guarded() {
        let logs = complete_review(&LogBook::new(), day(14), PrayerName::Dhuhr);
        let today = logs.get(day(14)).unwrap();
        assert!(today.review_completed);
        assert_eq!(today.best_prayer, Some(PrayerName::Dhuhr));
    }

    #[test]
    fn logbook_round_trips_as_array() {
        let logs = complete_all(LogBook::new(), day(12), [40, 50, 60, 70, 80]);
        let logs = complete_review(&logs, day(12), PrayerName::Asr);
        let logs = update_prayer(&logs, day(14), PrayerName::Fajr, &PrayerPatch::mark_done());

        let json = serde_json::to_string(&logs).unwrap();
        assert!(json.starts_with('['));
        let back: LogBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, logs);
    }

    #[test]
    fn duplicate_dates_resolve_to_last() {
        let json = r#"[
            {"date":"2026-10-14","prayers":{},"isReviewCompleted":false},
            {"date":"2026-10-14","prayers":{"Fajr":{"time":"","isDone":true,"khushu":60}},"isReviewCompleted":false}
        ]"#;
        let logs: LogBook = serde_json::from_str(json).unwrap();
        assert_eq!(logs.len(), 1);
        assert!(logs.get(day(14)).unwrap().entries.fajr.completed);
    }
}
