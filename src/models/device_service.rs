use super::AdminState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub labels: Vec<String>,
    pub base_address: String,
    pub admin_state: AdminState,
    pub last_connected: i64,
    pub last_reported: i64,
    pub created: i64,
    pub modified: i64,
}
