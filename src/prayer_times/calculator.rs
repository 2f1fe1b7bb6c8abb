use anyhow::{anyhow, Result};
use chrono::{FixedOffset, NaiveDate, NaiveTime};
use log::warn;
use salah::prelude::*;
use salah::prelude::Coordinates as GeoPoint;

use crate::config::settings::LocationConfig;
use crate::models::PrayerName;
use crate::prayer_times::location::Coordinates;

/// Scheduled times for one day. `None` marks a time that could not be
/// determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerTimings {
    times: [Option<NaiveTime>; 5],
}

impl PrayerTimings {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn from_times(times: [Option<NaiveTime>; 5]) -> Self {
        Self { times }
    }

    pub fn get(&self, name: PrayerName) -> Option<NaiveTime> {
        self.times[name.index()]
    }

    pub fn is_available(&self) -> bool {
        self.times.iter().any(Option::is_some)
    }

    /// First prayer after `now` today, or `None` once Isha has passed.
    pub fn next_after(&self, now: NaiveTime) -> Option<(PrayerName, NaiveTime)> {
        PrayerName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|t| (name, t)))
            .find(|(_, t)| *t > now)
    }
}

pub trait PrayerTimeProvider {
    fn timings(&self, coords: Option<Coordinates>, date: NaiveDate) -> PrayerTimings;
}

/// Offline astronomical calculation.
#[derive(Debug, Clone)]
pub struct SalahProvider {
    method: Method,
    madhab: Madhab,
    tz_offset_minutes: i32,
}

impl SalahProvider {
    pub fn new(method: &str, madhab: &str, tz_offset_minutes: i32) -> Result<Self> {
        Ok(Self {
            method: parse_method(method)?,
            madhab: parse_madhab(madhab)?,
            tz_offset_minutes,
        })
    }

    pub fn from_config(config: &LocationConfig) -> Result<Self> {
        Self::new(&config.calc_method, &config.madhab, config.timezone_offset)
    }

    fn compute(&self, coords: Coordinates, date: NaiveDate) -> Result<PrayerTimings> {
        let location = GeoPoint::new(coords.latitude, coords.longitude);
        let params = Configuration::with(self.method, self.madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(location)
            .with_configuration(params)
            .calculate()
            .map_err(|e| anyhow!("Prayer calculation failed: {}", e))?;

        let offset = FixedOffset::east_opt(self.tz_offset_minutes * 60)
            .ok_or_else(|| anyhow!("Invalid timezone offset: {}", self.tz_offset_minutes))?;

        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> Option<NaiveTime> {
            Some(utc.with_timezone(&offset).time())
        };

        Ok(PrayerTimings::from_times([
            to_local(times.time(Prayer::Fajr)),
            to_local(times.time(Prayer::Dhuhr)),
            to_local(times.time(Prayer::Asr)),
            to_local(times.time(Prayer::Maghrib)),
            to_local(times.time(Prayer::Isha)),
        ]))
    }
}

impl PrayerTimeProvider for SalahProvider {
    fn timings(&self, coords: Option<Coordinates>, date: NaiveDate) -> PrayerTimings {
        let Some(coords) = coords else {
            return PrayerTimings::unavailable();
        };
        self.compute(coords, date).unwrap_or_else(|e| {
            warn!("No prayer times for {}: {:#}", date, e);
            PrayerTimings::unavailable()
        })
    }
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(anyhow!("Unknown calculation method: '{}'", s)),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(anyhow!("Unknown madhab: '{}'", s)),
    }
}
