use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Reminders,
    DailyMessage,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 2] = [PreferenceKey::Reminders, PreferenceKey::DailyMessage];

    pub fn label(&self) -> &'static str {
        match self {
            PreferenceKey::Reminders => "التنبيه بالصلاة",
            PreferenceKey::DailyMessage => "الرسائل التشجيعية",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            PreferenceKey::Reminders => "قبل الأذان بـ 10 دقائق",
            PreferenceKey::DailyMessage => "رسالة هادئة كل صباح",
        }
    }
}

impl FromStr for PreferenceKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reminders" | "notifications" => Ok(PreferenceKey::Reminders),
            "daily-message" | "daily_message" | "message" => Ok(PreferenceKey::DailyMessage),
            _ => Err(anyhow::anyhow!("Unknown setting: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "notificationsEnabled", default = "default_true")]
    pub reminders_enabled: bool,
    #[serde(rename = "dailyMessageEnabled", default = "default_true")]
    pub daily_message_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            reminders_enabled: true,
            daily_message_enabled: true,
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::Reminders => self.reminders_enabled,
            PreferenceKey::DailyMessage => self.daily_message_enabled,
        }
    }

    /// Flip one flag and return its new value. The caller persists.
    pub fn toggle(&mut self, key: PreferenceKey) -> bool {
        let flag = match key {
            PreferenceKey::Reminders => &mut self.reminders_enabled,
            PreferenceKey::DailyMessage => &mut self.daily_message_enabled,
        };
        *flag = !*flag;
        *flag
    }
}
