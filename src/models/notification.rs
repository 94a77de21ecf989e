use super::{Category, NotificationStatus, Severity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub category: Option<Category>,
    pub labels: Vec<String>,
    pub content: String,
    pub content_type: String,
    pub description: String,
    pub sender: String,
    pub severity: Severity,
    pub status: NotificationStatus,
    pub created: i64,
    pub modified: i64,
}
