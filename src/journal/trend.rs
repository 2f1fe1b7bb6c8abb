use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::journal::manager::{daily_average, LogBook};

/// Days shown in the weekly chart.
pub const TREND_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub label: &'static str,
    pub value: f64,
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sat => "السبت",
        Weekday::Sun => "الأحد",
        Weekday::Mon => "الاثنين",
        Weekday::Tue => "الثلاثاء",
        Weekday::Wed => "الأربعاء",
        Weekday::Thu => "الخميس",
        Weekday::Fri => "الجمعة",
    }
}

/// Daily averages for the week ending at `today`, oldest first. Days with no
/// record count as 0.
pub fn weekly_trend(logs: &LogBook, today: NaiveDate) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let value = logs.get(date).map(daily_average).unwrap_or(0.0);
            TrendPoint {
                date,
                label: weekday_label(date.weekday()),
                value,
            }
        })
        .collect()
}

/// Mean daily average over stored days that have at least one completed prayer.
pub fn overall_average(logs: &LogBook) -> f64 {
    let active: Vec<f64> = logs
        .iter()
        .filter(|log| log.entries.completed_count() > 0)
        .map(daily_average)
        .collect();
    if active.is_empty() {
        return 0.0;
    }
    active.iter().sum::<f64>() / active.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::manager::update_prayer;
    use crate::models::{PrayerName, PrayerPatch};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn done(logs: &LogBook, date: NaiveDate, name: PrayerName, score: u8) -> LogBook {
        let logs = update_prayer(logs, date, name, &PrayerPatch::mark_done());
        update_prayer(&logs, date, name, &PrayerPatch::score(score))
    }

    #[test]
    fn trend_covers_seven_days_oldest_first() {
        let logs = done(&LogBook::new(), day(14), PrayerName::Fajr, 100);
        let logs = done(&logs, day(10), PrayerName::Asr, 50);

        let trend = weekly_trend(&logs, day(14));
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, day(8));
        assert_eq!(trend[6].date, day(14));
        assert_eq!(trend[6].value, 20.0);
        assert_eq!(trend[2].value, 10.0);
        assert_eq!(trend[1].value, 0.0);
    }

    #[test]
    fn trend_labels_are_arabic_weekdays() {
        // 2026-10-14 is a Wednesday.
        let trend = weekly_trend(&LogBook::new(), day(14));
        assert_eq!(trend[6].label, "الأربعاء");
        assert_eq!(trend[3].label, "الأحد");
    }

    #[test]
    fn overall_average_skips_empty_days() {
        assert_eq!(overall_average(&LogBook::new()), 0.0);

        let logs = done(&LogBook::new(), day(13), PrayerName::Fajr, 100);
        let logs = done(&logs, day(14), PrayerName::Fajr, 50);
        // Touched but nothing completed.
        let logs = update_prayer(&logs, day(12), PrayerName::Isha, &PrayerPatch::score(70));
        assert_eq!(overall_average(&logs), 15.0);
    }
}
