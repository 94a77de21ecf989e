pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const CORE_DATA_URL: &str = "CORE_DATA_URL";
pub const CORE_METADATA_URL: &str = "CORE_METADATA_URL";
pub const SUPPORT_NOTIFICATIONS_URL: &str = "SUPPORT_NOTIFICATIONS_URL";
pub const SUPPORT_SCHEDULER_URL: &str = "SUPPORT_SCHEDULER_URL";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
