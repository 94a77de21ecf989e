use serde::{Deserialize, Serialize};

use super::is_zero;
use crate::models::{Category, Notification, NotificationStatus, Severity};
use crate::validation::{rules, Checker, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub sender: String,
    pub severity: Severity,
    #[serde(default)]
    pub status: NotificationStatus,
}

impl NotificationDto {
    pub fn new(
        category: Option<Category>,
        labels: Vec<String>,
        content: impl Into<String>,
        sender: impl Into<String>,
        severity: Severity,
    ) -> Self {
        NotificationDto {
            created: 0,
            modified: 0,
            id: String::new(),
            category,
            labels,
            content: content.into(),
            content_type: String::new(),
            description: String::new(),
            sender: sender.into(),
            severity,
            status: NotificationStatus::New,
        }
    }
}

impl Validate for NotificationDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.required_without(
            "category",
            self.category.is_some(),
            "labels",
            !self.labels.is_empty(),
        );
        for (i, label) in self.labels.iter().enumerate() {
            check.required(&format!("labels[{i}]"), label);
        }
        check.required("content", &self.content);
        check.rules("sender", &self.sender, &[rules::NONE_EMPTY_STRING]);
    }
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification {
            id: dto.id,
            category: dto.category,
            labels: dto.labels,
            content: dto.content,
            content_type: dto.content_type,
            description: dto.description,
            sender: dto.sender,
            severity: dto.severity,
            status: dto.status,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        NotificationDto {
            created: n.created,
            modified: n.modified,
            id: n.id,
            category: n.category,
            labels: n.labels,
            content: n.content,
            content_type: n.content_type,
            description: n.description,
            sender: n.sender,
            severity: n.severity,
            status: n.status,
        }
    }
}
