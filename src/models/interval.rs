use std::time::Duration;

use chrono::NaiveDateTime;

use crate::helpers::{parse_duration, parse_interval_datetime, DurationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    pub id: String,
    pub name: String,
    /// `YYYYMMDDThhmmss`, empty when unbounded.
    pub start: String,
    pub end: String,
    pub frequency: String,
    pub run_once: bool,
    pub created: i64,
    pub modified: i64,
}

impl Interval {
    pub fn frequency_duration(&self) -> Result<Duration, DurationError> {
        parse_duration(&self.frequency)
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        parse_interval_datetime(&self.start).ok()
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        parse_interval_datetime(&self.end).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let interval = Interval {
            id: String::new(),
            name: "hourly".to_string(),
            start: "20240101T000000".to_string(),
            end: String::new(),
            frequency: "1h".to_string(),
            run_once: false,
            created: 0,
            modified: 0,
        };
        assert_eq!(interval.frequency_duration().unwrap(), Duration::from_secs(3600));
        assert!(interval.start_time().is_some());
        assert!(interval.end_time().is_none());
    }
}
