//! Path segments of the REST surface.
//!
//! Every route is `/api/v2/<resource>[/<filter>/<param>...]`; the clients join
//! these segments and escape the parameters in between.

pub const API_BASE: [&str; 2] = ["api", "v2"];

pub const PING: &str = "ping";
pub const VERSION: &str = "version";
pub const CONFIG: &str = "config";

pub const DEVICE: &str = "device";
pub const DEVICE_PROFILE: &str = "deviceprofile";
pub const DEVICE_SERVICE: &str = "deviceservice";
pub const EVENT: &str = "event";
pub const READING: &str = "reading";
pub const SUBSCRIPTION: &str = "subscription";
pub const NOTIFICATION: &str = "notification";
pub const TRANSMISSION: &str = "transmission";
pub const INTERVAL: &str = "interval";
pub const INTERVAL_ACTION: &str = "intervalaction";

pub const ALL: &str = "all";
pub const NAME: &str = "name";
pub const ID: &str = "id";
pub const CHECK: &str = "check";
pub const COUNT: &str = "count";
pub const AGE: &str = "age";
pub const START: &str = "start";
pub const END: &str = "end";
pub const LABEL: &str = "label";
pub const CATEGORY: &str = "category";
pub const RECEIVER: &str = "receiver";
pub const STATUS: &str = "status";
pub const SERVICE: &str = "service";
pub const PROFILE: &str = "profile";
pub const MANUFACTURER: &str = "manufacturer";
pub const MODEL: &str = "model";
pub const RESOURCE_NAME: &str = "resourceName";
