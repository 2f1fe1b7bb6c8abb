use chrono::{Datelike, NaiveDate};

pub const ENCOURAGING_QUOTES: &[&str] = &[
    "اليوم هو محاولة لخشوع القلب",
    "استمر، كل يوم خطوة للأمام",
    "الخشوع رحلة، وليس وجهة نهائية",
    "قليلٌ دائم خيرٌ من كثيرٍ منقطع",
    "صلاتك هي صلتك بالله، فاجعلها هادئة",
];

/// The quote for a given day; stable for the whole day.
pub fn quote_for(date: NaiveDate) -> &'static str {
    let idx = date.ordinal0() as usize % ENCOURAGING_QUOTES.len();
    ENCOURAGING_QUOTES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_days_rotate() {
        let a = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let b = a.succ_opt().unwrap();
        assert_ne!(quote_for(a), quote_for(b));
        assert_eq!(quote_for(a), quote_for(a));
    }
}
