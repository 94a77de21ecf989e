use super::{Address, AdminState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalAction {
    pub id: String,
    pub name: String,
    pub interval_name: String,
    pub address: Address,
    pub content: String,
    pub content_type: String,
    pub admin_state: AdminState,
    pub created: i64,
    pub modified: i64,
}
