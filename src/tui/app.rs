use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    DefaultTerminal, Frame,
};
use std::sync::mpsc::Sender;

use crate::config::AppConfig;
use crate::db::{DailyMessageGate, KeyValueStore, LogRepo, PreferencesRepo};
use crate::journal::{self, daily_average, get_or_create_today, review_available, LogBook};
use crate::models::{clamp_score, DailyLog, PreferenceKey, Preferences, PrayerName, PrayerPatch};
use crate::prayer_times::{lookup, ConfigLocation, PrayerTimings, SalahProvider};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, home, prayers, review, settings, stats, tabs, welcome};
use crate::utils::clock::Clock;
use crate::utils::hijri::hijri_string;
use crate::utils::quotes::quote_for;
use crate::utils::share::{share_message, ClipboardCommand, ShareTarget};

/// Slider step for the presence score.
const SCORE_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Prayers,
    Stats,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Prayers, Tab::Stats, Tab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "الرئيسية",
            Tab::Prayers => "الصلوات",
            Tab::Stats => "الإحصائيات",
            Tab::Settings => "الإعدادات",
        }
    }

    fn next(&self) -> Tab {
        match self {
            Tab::Home => Tab::Prayers,
            Tab::Prayers => Tab::Stats,
            Tab::Stats => Tab::Settings,
            Tab::Settings => Tab::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome(&'static str),
    Review { focus_idx: usize },
}

pub struct App {
    pub tab: Tab,
    pub overlay: Overlay,
    pub config: AppConfig,
    pub focus_idx: usize,
    pub should_quit: bool,
    /// One-line feedback shown under the tabs, e.g. after sharing.
    pub notice: Option<String>,

    pub today: NaiveDate,
    pub hijri_str: String,
    pub logs: LogBook,
    pub prefs: Preferences,
    pub timings: PrayerTimings,
}

impl App {
    pub fn new(config: AppConfig, store: &dyn KeyValueStore, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let logs = LogRepo::load(store).unwrap_or_else(|e| {
            warn!("Could not read daily logs: {}", e);
            LogBook::new()
        });
        let prefs = PreferencesRepo::load(store).unwrap_or_else(|e| {
            warn!("Could not read preferences: {}", e);
            Preferences::default()
        });

        let overlay = welcome_overlay(store, &prefs, today);

        App {
            tab: Tab::Home,
            overlay,
            hijri_str: hijri_string(today, config.display.hijri_offset),
            config,
            focus_idx: 0,
            should_quit: false,
            notice: None,
            today,
            logs,
            prefs,
            timings: PrayerTimings::unavailable(),
        }
    }

    pub fn today_log(&self) -> DailyLog {
        get_or_create_today(&self.logs, self.today)
    }

    pub fn average(&self) -> f64 {
        daily_average(&self.today_log())
    }

    /// Move to a new calendar day if the clock has crossed midnight, showing
    /// that day's message when it is due. Returns true when the day changed.
    pub fn roll_day(&mut self, clock: &dyn Clock, store: &dyn KeyValueStore) -> bool {
        let now = clock.today();
        if now == self.today {
            return false;
        }
        info!("Day changed to {}", now);
        self.today = now;
        self.hijri_str = hijri_string(now, self.config.display.hijri_offset);
        self.timings = PrayerTimings::unavailable();
        self.overlay = welcome_overlay(store, &self.prefs, now);
        true
    }

    pub fn set_timings(&mut self, timings: PrayerTimings) {
        self.timings = timings;
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &dyn KeyValueStore) {
        // Only handle actual key presses; some terminals also send release and repeat
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.overlay {
            Overlay::Welcome(_) => {
                self.overlay = Overlay::None;
                return;
            }
            Overlay::Review { focus_idx } => {
                self.handle_review_key(key, focus_idx, store);
                return;
            }
            Overlay::None => {}
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.switch_tab(Tab::ALL[idx]);
                return;
            }
            _ => {}
        }

        match self.tab {
            Tab::Home => self.handle_home_key(key),
            Tab::Prayers => self.handle_prayers_key(key, store),
            Tab::Stats => {}
            Tab::Settings => self.handle_settings_key(key, store),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.focus_idx = 0;
        self.notice = None;
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.share(),
            KeyCode::Char('r') | KeyCode::Enter => {
                if review_available(&self.today_log()) {
                    self.overlay = Overlay::Review { focus_idx: 0 };
                }
            }
            _ => {}
        }
    }

    fn handle_prayers_key(&mut self, key: KeyEvent, store: &dyn KeyValueStore) {
        let max = PrayerName::ALL.len() - 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.focus_idx = self.focus_idx.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.focus_idx = (self.focus_idx + 1).min(max),
            KeyCode::Char('m') | KeyCode::Enter => self.mark_focused_done(store),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => {
                self.nudge_focused_score(SCORE_STEP, store)
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
                self.nudge_focused_score(-SCORE_STEP, store)
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent, store: &dyn KeyValueStore) {
        let max = PreferenceKey::ALL.len() - 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.focus_idx = self.focus_idx.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.focus_idx = (self.focus_idx + 1).min(max),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_preference(PreferenceKey::ALL[self.focus_idx], store)
            }
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent, focus_idx: usize, store: &dyn KeyValueStore) {
        let max = PrayerName::ALL.len() - 1;
        match key.code {
            KeyCode::Esc => self.overlay = Overlay::None,
            KeyCode::Up | KeyCode::Char('k') => {
                self.overlay = Overlay::Review {
                    focus_idx: focus_idx.saturating_sub(1),
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.overlay = Overlay::Review {
                    focus_idx: (focus_idx + 1).min(max),
                }
            }
            KeyCode::Enter => {
                self.complete_review(PrayerName::ALL[focus_idx], store);
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn mark_focused_done(&mut self, store: &dyn KeyValueStore) {
        let name = PrayerName::ALL[self.focus_idx];
        if self.today_log().entries.get(name).completed {
            return;
        }
        let logs = journal::update_prayer(&self.logs, self.today, name, &PrayerPatch::mark_done());
        self.commit(logs, store);
    }

    fn nudge_focused_score(&mut self, delta: i32, store: &dyn KeyValueStore) {
        let name = PrayerName::ALL[self.focus_idx];
        let entry = self.today_log().entries.get(name).clone();
        if !entry.completed {
            return;
        }
        let score = clamp_score(entry.presence_score as i32 + delta);
        if score == entry.presence_score {
            return;
        }
        let logs = journal::update_prayer(&self.logs, self.today, name, &PrayerPatch::score(score));
        self.commit(logs, store);
    }

    fn complete_review(&mut self, best: PrayerName, store: &dyn KeyValueStore) {
        if !review_available(&self.today_log()) {
            return;
        }
        let logs = journal::complete_review(&self.logs, self.today, best);
        self.commit(logs, store);
    }

    fn toggle_preference(&mut self, key: PreferenceKey, store: &dyn KeyValueStore) {
        self.prefs.toggle(key);
        if let Err(e) = PreferencesRepo::save(store, &self.prefs) {
            warn!("Preferences not saved: {}", e);
        }
    }

    /// Adopt the new collection and persist it. A failed write keeps the
    /// in-memory state.
    fn commit(&mut self, logs: LogBook, store: &dyn KeyValueStore) {
        self.logs = logs;
        if let Err(e) = LogRepo::save(store, &self.logs) {
            warn!("Daily logs not saved: {}", e);
        }
    }

    fn share(&mut self) {
        let message = share_message(self.average());
        let clipboard = ClipboardCommand::default();
        self.notice = Some(match clipboard.share(&message) {
            Ok(()) => "تم نسخ رسالة المشاركة إلى الحافظة".to_string(),
            Err(e) => {
                warn!("Sharing failed: {:#}", e);
                message
            }
        });
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(2), // tabs + hints
            ])
            .split(area);

        header::render(frame, chunks[0], self.today, &self.hijri_str);

        let today = self.today_log();
        match self.tab {
            Tab::Home => home::render(frame, chunks[1], &today, self.notice.as_deref()),
            Tab::Prayers => prayers::render(
                frame,
                chunks[1],
                &today,
                &self.timings,
                self.config.display.language,
                self.focus_idx,
            ),
            Tab::Stats => stats::render(frame, chunks[1], &self.logs, self.today),
            Tab::Settings => settings::render(frame, chunks[1], &self.prefs, self.focus_idx),
        }

        tabs::render(frame, chunks[2], self.tab);

        match &self.overlay {
            Overlay::None => {}
            Overlay::Welcome(quote) => welcome::render(frame, area, quote),
            Overlay::Review { focus_idx } => review::render(frame, area, *focus_idx),
        }
    }
}

fn welcome_overlay(store: &dyn KeyValueStore, prefs: &Preferences, today: NaiveDate) -> Overlay {
    match DailyMessageGate::should_show(store, prefs, today) {
        Ok(true) => Overlay::Welcome(quote_for(today)),
        Ok(false) => Overlay::None,
        Err(e) => {
            warn!("Daily message marker unavailable: {}", e);
            Overlay::None
        }
    }
}

fn start_lookup(config: &AppConfig, date: NaiveDate, tx: Sender<Event>) {
    match SalahProvider::from_config(&config.location) {
        Ok(provider) => {
            let location = ConfigLocation::from_config(&config.location);
            lookup::spawn_lookup(location, provider, date, move |timings| {
                let _ = tx.send(Event::Timings(timings));
            });
        }
        Err(e) => warn!("Prayer times disabled: {:#}", e),
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, store: &dyn KeyValueStore, clock: &dyn Clock) -> Result<()> {
    let mut app = App::new(config, store, clock);

    let mut terminal = ratatui::init();
    restoring(
        || event_loop(&mut terminal, &mut app, store, clock),
        ratatui::restore,
    )
}

/// Runs `body`, then `restore` whether or not `body` failed.
fn restoring<T>(body: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let result = body();
    restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
) -> Result<()> {
    let events = EventHandler::new(500);
    start_lookup(&app.config, app.today, events.sender());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, store);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                if app.roll_day(clock, store) {
                    start_lookup(&app.config, app.today, events.sender());
                }
            }
            Event::Timings(timings) => app.set_timings(timings),
        }
    }

    Ok(())
}
