mod duration;
mod load_dotenv;
mod time;

pub use duration::{parse_duration, DurationError};
pub use load_dotenv::load_dotenv;
pub use time::{now_iso, now_nanos, parse_interval_datetime, INTERVAL_DATETIME_FORMAT};
