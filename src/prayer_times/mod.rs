pub mod calculator;
pub mod location;
pub mod lookup;

pub use calculator::{PrayerTimings, SalahProvider};
pub use location::ConfigLocation;
