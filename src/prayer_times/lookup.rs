use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::prayer_times::calculator::{PrayerTimeProvider, PrayerTimings};
use crate::prayer_times::location::LocationProvider;

/// Locate, then compute timings, on a worker thread. `deliver` runs on that
/// thread with the result.
pub fn spawn_lookup<L, P, F>(location: L, provider: P, date: NaiveDate, deliver: F) -> JoinHandle<()>
where
    L: LocationProvider + Send + 'static,
    P: PrayerTimeProvider + Send + 'static,
    F: FnOnce(PrayerTimings) + Send + 'static,
{
    thread::spawn(move || {
        let coords = location.locate();
        if coords.is_none() {
            debug!("No location available, prayer times will be unknown");
        }
        deliver(provider.timings(coords, date));
    })
}

/// Run a lookup and wait at most `timeout` for it. A slow or failed lookup
/// gives unavailable timings.
pub fn fetch_blocking<L, P>(location: L, provider: P, date: NaiveDate, timeout: Duration) -> PrayerTimings
where
    L: LocationProvider + Send + 'static,
    P: PrayerTimeProvider + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    spawn_lookup(location, provider, date, move |timings| {
        let _ = tx.send(timings);
    });
    match rx.recv_timeout(timeout) {
        Ok(timings) => timings,
        Err(e) => {
            warn!("Prayer time lookup gave up after {:?}: {}", timeout, e);
            PrayerTimings::unavailable()
        }
    }
}
