use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use std::time::SystemTime;

/// Layout of interval start/end timestamps, e.g. `20190802T150405`.
pub const INTERVAL_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

pub fn now_iso() -> String {
    let now: DateTime<Utc> = SystemTime::now().into();
    now.to_rfc3339()
}

pub fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

pub fn parse_interval_datetime(value: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value, INTERVAL_DATETIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval_datetime() {
        let dt = parse_interval_datetime("20190802T150405").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2019-08-02 15:04:05");
        assert!(parse_interval_datetime("2019-08-02T15:04:05").is_err());
        assert!(parse_interval_datetime("20191302T150405").is_err());
        assert!(parse_interval_datetime("").is_err());
    }
}
