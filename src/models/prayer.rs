use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lowest presence score a completed prayer can carry.
pub const MIN_SCORE: u8 = 10;
/// Highest presence score.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "الفجر",
            PrayerName::Dhuhr => "الظهر",
            PrayerName::Asr => "العصر",
            PrayerName::Maghrib => "المغرب",
            PrayerName::Isha => "العشاء",
        }
    }

    /// Position in the fixed daily order (Fajr = 0).
    pub fn index(&self) -> usize {
        match self {
            PrayerName::Fajr => 0,
            PrayerName::Dhuhr => 1,
            PrayerName::Asr => 2,
            PrayerName::Maghrib => 3,
            PrayerName::Isha => 4,
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// Clamp a raw score into the presence range. Used at input boundaries only;
/// the log manager stores whatever it is given.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerEntry {
    #[serde(rename = "time", default, with = "scheduled_time")]
    pub scheduled_time: Option<NaiveTime>,
    #[serde(rename = "isDone", default)]
    pub completed: bool,
    #[serde(rename = "khushu", default = "default_score")]
    pub presence_score: u8,
}

fn default_score() -> u8 {
    MIN_SCORE
}

impl Default for PrayerEntry {
    fn default() -> Self {
        Self {
            scheduled_time: None,
            completed: false,
            presence_score: MIN_SCORE,
        }
    }
}

impl PrayerEntry {
    /// Field-wise merge: every field present in `patch` overwrites ours.
    pub fn apply(&mut self, patch: &PrayerPatch) {
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(score) = patch.presence_score {
            self.presence_score = score;
        }
        if let Some(time) = patch.scheduled_time {
            self.scheduled_time = time;
        }
    }
}

/// Partial update for a single prayer entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerPatch {
    pub completed: Option<bool>,
    pub presence_score: Option<u8>,
    pub scheduled_time: Option<Option<NaiveTime>>,
}

impl PrayerPatch {
    pub fn mark_done() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    pub fn score(score: u8) -> Self {
        Self {
            presence_score: Some(score),
            ..Self::default()
        }
    }
}

/// `""` on the wire means the time is unknown.
mod scheduled_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::format::parse_hhmm;

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        Ok(parse_hhmm(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Fajr".parse::<PrayerName>().unwrap(), PrayerName::Fajr);
        assert_eq!("zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("ISHA".parse::<PrayerName>().unwrap(), PrayerName::Isha);
        assert!("sunrise".parse::<PrayerName>().is_err());
    }

    #[test]
    fn fixed_order_matches_index() {
        for (i, name) in PrayerName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(0), 10);
        assert_eq!(clamp_score(-5), 10);
        assert_eq!(clamp_score(55), 55);
        assert_eq!(clamp_score(250), 100);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut entry = PrayerEntry::default();
        entry.apply(&PrayerPatch::mark_done());
        assert!(entry.completed);
        assert_eq!(entry.presence_score, 10);

        entry.apply(&PrayerPatch::score(65));
        assert!(entry.completed);
        assert_eq!(entry.presence_score, 65);
        assert_eq!(entry.scheduled_time, None);
    }

    #[test]
    fn entry_wire_format() {
        let entry = PrayerEntry {
            scheduled_time: NaiveTime::from_hms_opt(5, 7, 0),
            completed: true,
            presence_score: 40,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"time":"05:07","isDone":true,"khushu":40}"#);

        let unknown: PrayerEntry =
            serde_json::from_str(r#"{"time":"","isDone":false,"khushu":10}"#).unwrap();
        assert_eq!(unknown, PrayerEntry::default());

        let placeholder: PrayerEntry =
            serde_json::from_str(r#"{"time":"--:--","isDone":false,"khushu":10}"#).unwrap();
        assert_eq!(placeholder.scheduled_time, None);
    }
}
