use anyhow::{anyhow, bail, Context, Result};
use std::str::FromStr;

use crate::cli::args::SettingsCommands;
use crate::config::AppConfig;
use crate::db::{KeyValueStore, LogRepo, PreferencesRepo};
use crate::journal::{
    self, daily_average, day_state, get_or_create_today, overall_average, review_available,
    weekly_trend,
};
use crate::models::{DayState, PreferenceKey, PrayerName, PrayerPatch};
use crate::prayer_times::{lookup, ConfigLocation, SalahProvider};
use crate::utils::clock::Clock;
use crate::utils::format::{format_percent, format_time_12h, progress_bar};
use crate::utils::share::{self, share_message, ClipboardCommand, ShareTarget, StdoutShare};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const OLIVE: &str = "\x1b[38;2;85;107;47m";

fn parse_prayer(s: &str) -> Result<PrayerName> {
    PrayerName::from_str(s)
        .map_err(|_| anyhow!("Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha", s))
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(store: &dyn KeyValueStore, clock: &dyn Clock) -> Result<()> {
    let logs = LogRepo::load(store)?;
    let today = get_or_create_today(&logs, clock.today());
    let average = daily_average(&today);

    println!();
    println_colored!(OLIVE, "  خاشع · {}", today.date_key());
    println!();
    for (name, entry) in today.entries.iter() {
        if entry.completed {
            println_colored!(
                GREEN,
                "  ● {:<8} {:<8} {}%",
                name.display_name(),
                name.arabic_name(),
                entry.presence_score
            );
        } else {
            println_colored!(DIM, "  ○ {:<8} {}", name.display_name(), name.arabic_name());
        }
    }
    println!();
    println_colored!(
        BOLD,
        "  Presence: {}  {}",
        format_percent(average),
        progress_bar(average, 100.0, 20)
    );
    let state = day_state(&today);
    match (state, today.best_prayer) {
        (DayState::Reviewed, Some(best)) => {
            println_colored!(GREEN, "  Day closed, most present in {}", best.display_name())
        }
        (DayState::AllDone, _) => {
            println_colored!(AMBER, "  All five done. Close the day with `khashi review <prayer>`")
        }
        _ => println_colored!(DIM, "  {}", state.label()),
    }
    println!();
    Ok(())
}

// ─── Mark / score ────────────────────────────────────────────────────────────

pub fn handle_mark(store: &dyn KeyValueStore, clock: &dyn Clock, prayer: &str) -> Result<()> {
    let name = parse_prayer(prayer)?;
    let date = clock.today();
    let logs = LogRepo::load(store)?;

    if get_or_create_today(&logs, date).entries.get(name).completed {
        println_colored!(DIM, "  {} is already completed", name.display_name());
        return Ok(());
    }

    let logs = journal::update_prayer(&logs, date, name, &PrayerPatch::mark_done());
    LogRepo::save(store, &logs)?;
    println_colored!(GREEN, "  ✓ {} marked as completed", name.display_name());

    if let Some(today) = logs.get(date) {
        if review_available(today) {
            println_colored!(AMBER, "  All five done. Close the day with `khashi review <prayer>`");
        }
    }
    Ok(())
}

pub fn handle_score(
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    prayer: &str,
    score: u8,
) -> Result<()> {
    let name = parse_prayer(prayer)?;
    let date = clock.today();
    let logs = LogRepo::load(store)?;

    if !get_or_create_today(&logs, date).entries.get(name).completed {
        bail!("Mark {} as completed before scoring it", name.display_name());
    }

    let logs = journal::update_prayer(&logs, date, name, &PrayerPatch::score(score));
    LogRepo::save(store, &logs)?;
    println_colored!(GREEN, "  ✓ {} presence set to {}%", name.display_name(), score);
    Ok(())
}

// ─── Review ──────────────────────────────────────────────────────────────────

pub fn handle_review(store: &dyn KeyValueStore, clock: &dyn Clock, prayer: &str) -> Result<()> {
    let name = parse_prayer(prayer)?;
    let date = clock.today();
    let logs = LogRepo::load(store)?;
    let today = get_or_create_today(&logs, date);

    match day_state(&today) {
        DayState::InProgress => bail!(
            "Only {}/5 prayers completed; the review opens once all five are done",
            today.entries.completed_count()
        ),
        DayState::Reviewed => {
            println_colored!(DIM, "  Today is already closed");
            return Ok(());
        }
        DayState::AllDone => {}
    }

    let logs = journal::complete_review(&logs, date, name);
    LogRepo::save(store, &logs)?;
    println_colored!(GREEN, "  ✓ Day closed, most present in {}", name.display_name());
    Ok(())
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, clock: &dyn Clock) -> Result<()> {
    let provider = SalahProvider::from_config(&config.location)?;
    let location = ConfigLocation::from_config(&config.location);
    let timings = lookup::fetch_blocking(location, provider, clock.today(), config.lookup_timeout());
    let lang = config.display.language;
    let now = clock.now();

    println!();
    println_colored!(OLIVE, "  Prayer Times · {} ({})", config.location.name, clock.today());
    println!();
    for name in PrayerName::ALL {
        let time = timings.get(name);
        let line = format!(
            "  {:<8} {:<8}  {}",
            name.display_name(),
            name.arabic_name(),
            format_time_12h(time, lang)
        );
        match time {
            Some(t) if t < now => println_colored!(DIM, "{}", line),
            _ => println_colored!(BOLD, "{}", line),
        }
    }
    if let Some((next, at)) = timings.next_after(now) {
        println!();
        println_colored!(AMBER, "  Next: {} at {}", next.display_name(), format_time_12h(Some(at), lang));
    }
    if !timings.is_available() {
        println!();
        println_colored!(
            DIM,
            "  Set latitude/longitude in {:?} to see times",
            AppConfig::config_path()?
        );
    }
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(store: &dyn KeyValueStore, clock: &dyn Clock) -> Result<()> {
    let logs = LogRepo::load(store)?;
    if logs.is_empty() {
        println!();
        println_colored!(DIM, "  No days recorded yet. Start with `khashi mark fajr`");
        println!();
        return Ok(());
    }
    let trend = weekly_trend(&logs, clock.today());

    println!();
    println_colored!(OLIVE, "  تطور الخشوع الأسبوعي");
    println!();
    for point in &trend {
        let color = if point.value > 80.0 { GREEN } else { AMBER };
        println_colored!(
            color,
            "  {}  {:<9} {}  {}",
            point.date.format("%m-%d"),
            point.label,
            progress_bar(point.value, 100.0, 20),
            format_percent(point.value)
        );
    }
    println!();
    println_colored!(BOLD, "  Overall presence: {}", format_percent(overall_average(&logs)));
    println!();
    Ok(())
}

// ─── Settings ────────────────────────────────────────────────────────────────

pub fn handle_settings(store: &dyn KeyValueStore, action: Option<&SettingsCommands>) -> Result<()> {
    let mut prefs = PreferencesRepo::load(store)?;

    if let Some(SettingsCommands::Toggle { key }) = action {
        let key = PreferenceKey::from_str(key)?;
        let enabled = prefs.toggle(key);
        PreferencesRepo::save(store, &prefs)?;
        println_colored!(
            GREEN,
            "  ✓ {} {}",
            key.label(),
            if enabled { "on" } else { "off" }
        );
        return Ok(());
    }

    println!();
    for key in PreferenceKey::ALL {
        let (mark, color) = if prefs.get(key) { ("on ", GREEN) } else { ("off", DIM) };
        println_colored!(color, "  [{}] {}  · {}", mark, key.label(), key.hint());
    }
    println!();
    Ok(())
}

// ─── Share ───────────────────────────────────────────────────────────────────

pub fn handle_share(store: &dyn KeyValueStore, clock: &dyn Clock) -> Result<()> {
    let logs = LogRepo::load(store)?;
    let average = daily_average(&get_or_create_today(&logs, clock.today()));
    let message = share_message(average);

    let clipboard = ClipboardCommand::default();
    let targets: [&dyn ShareTarget; 2] = [&clipboard, &StdoutShare];
    if share::share(&message, &targets) == Some("clipboard") {
        println_colored!(GREEN, "  ✓ تم نسخ رسالة المشاركة إلى الحافظة");
    }
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &dyn KeyValueStore) -> Result<()> {
    println!("{}", export_json(store)?);
    Ok(())
}

/// Stored logs exactly as saved, so unreadable data is not lost in export.
fn export_json(store: &dyn KeyValueStore) -> Result<String> {
    LogRepo::raw(store).context("Reading stored logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{KEY_LOGS, KEY_LOGS_BACKUP};
    use crate::db::MemoryStore;
    use crate::utils::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    #[test]
    fn mark_then_score_persists() {
        let store = MemoryStore::new();
        let clock = clock();
        handle_mark(&store, &clock, "asr").unwrap();
        handle_score(&store, &clock, "asr", 75).unwrap();

        let logs = LogRepo::load(&store).unwrap();
        let entry = &logs.get(clock.today()).unwrap().entries.asr;
        assert!(entry.completed);
        assert_eq!(entry.presence_score, 75);
    }

    #[test]
    fn scoring_an_open_prayer_is_refused() {
        let store = MemoryStore::new();
        assert!(handle_score(&store, &clock(), "fajr", 50).is_err());
        assert!(LogRepo::load(&store).unwrap().is_empty());
    }

    #[test]
    fn review_requires_all_five() {
        let store = MemoryStore::new();
        let clock = clock();
        handle_mark(&store, &clock, "fajr").unwrap();
        assert!(handle_review(&store, &clock, "fajr").is_err());

        for p in ["dhuhr", "asr", "maghrib", "isha"] {
            handle_mark(&store, &clock, p).unwrap();
        }
        handle_review(&store, &clock, "maghrib").unwrap();
        let logs = LogRepo::load(&store).unwrap();
        let today = logs.get(clock.today()).unwrap();
        assert_eq!(day_state(today), DayState::Reviewed);
        assert_eq!(today.best_prayer, Some(PrayerName::Maghrib));
    }

    #[test]
    fn toggle_persists_preference() {
        let store = MemoryStore::new();
        let action = SettingsCommands::Toggle {
            key: "daily-message".to_string(),
        };
        handle_settings(&store, Some(&action)).unwrap();
        assert!(!PreferencesRepo::load(&store).unwrap().daily_message_enabled);
    }

    #[test]
    fn export_keeps_unreadable_history() {
        let store = MemoryStore::new();
        let stored = r#"[{"date":"2026-10-13","prayers":{"Fajr":{"time":"","isDone":true,"khushu":300}}}]"#;
        store.set(KEY_LOGS, stored).unwrap();

        assert_eq!(export_json(&store).unwrap(), stored);
        handle_mark(&store, &clock(), "fajr").unwrap();
        assert_eq!(store.get(KEY_LOGS_BACKUP).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn export_of_saved_logs_matches_store() {
        let store = MemoryStore::new();
        handle_mark(&store, &clock(), "isha").unwrap();
        let json = export_json(&store).unwrap();
        assert_eq!(Some(json), store.get(KEY_LOGS).unwrap());
    }

    #[test]
    fn unknown_prayer_is_an_error() {
        assert!(handle_mark(&MemoryStore::new(), &clock(), "duha").is_err());
    }
}
