use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in Arabic (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "؟"
    }
}

/// Hijri date for `date`, shifted by `offset_days` for local moon sighting.
/// Falls back to the Gregorian date when conversion is out of range.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> String {
    let adjusted = date + Duration::days(offset_days as i64);

    match HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    ) {
        Ok(hd) => format!("{} {} {} هـ", hd.day(), hijri_month_name(hd.month()), hd.year()),
        Err(e) => {
            log::debug!("Hijri conversion failed for {}: {}", adjusted, e);
            date.format("%Y-%m-%d").to_string()
        }
    }
}
