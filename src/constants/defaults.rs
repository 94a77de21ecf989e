use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";

pub const CORE_DATA_URL: &str = "http://localhost:59880";
pub const CORE_METADATA_URL: &str = "http://localhost:59881";
pub const SUPPORT_NOTIFICATIONS_URL: &str = "http://localhost:59860";
pub const SUPPORT_SCHEDULER_URL: &str = "http://localhost:59861";
