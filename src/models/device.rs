use std::collections::HashMap;

use super::{AdminState, OperatingState};

/// Connection properties of one protocol, e.g. `{"Address": "10.0.0.1", "Port": "502"}`.
pub type ProtocolProperties = HashMap<String, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub description: String,
    pub admin_state: AdminState,
    pub operating_state: OperatingState,
    pub protocols: HashMap<String, ProtocolProperties>,
    pub last_connected: i64,
    pub last_reported: i64,
    pub labels: Vec<String>,
    pub location: Option<serde_json::Value>,
    pub service_name: String,
    pub profile_name: String,
    pub auto_events: Vec<AutoEvent>,
    pub notify: bool,
    pub created: i64,
    pub modified: i64,
}

/// Periodic reading of a device resource, taken by the owning device service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoEvent {
    pub frequency: String,
    pub on_change: bool,
    pub resource: String,
}

impl Device {
    pub fn is_locked(&self) -> bool {
        self.admin_state == AdminState::Locked
    }
}
