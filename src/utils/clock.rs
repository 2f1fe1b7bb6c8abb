use chrono::{Local, NaiveDate, NaiveTime};

/// Source of "today" for record keys and the daily-message gate.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn now(&self) -> NaiveTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock stopped at one instant.
#[cfg(test)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[cfg(test)]
impl FixedClock {
    pub fn at(date: NaiveDate) -> Self {
        Self {
            date,
            time: NaiveTime::MIN,
        }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now(&self) -> NaiveTime {
        self.time
    }
}
