pub mod manager;
pub mod trend;

pub use manager::{
    complete_review, daily_average, day_state, get_or_create_today, review_available,
    update_prayer, LogBook,
};
pub use trend::{overall_average, weekly_trend};
