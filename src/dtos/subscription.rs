use serde::{Deserialize, Serialize};

use super::{is_given, is_zero, AddressDto};
use crate::models::{AdminState, Category, Subscription, EMAIL, REST};
use crate::validation::{rules, Checker, Validate};

const CHANNEL_TYPES: &[&str] = &[REST, EMAIL];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub channels: Vec<AddressDto>,
    #[serde(default)]
    pub receiver: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub resend_limit: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resend_interval: String,
    pub admin_state: AdminState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<AddressDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

fn check_channels(check: &mut Checker<'_>, channels: &[AddressDto]) {
    check.not_empty("channels", channels);
    check.each("channels", channels);
    for (i, channel) in channels.iter().enumerate() {
        channel.check_type(check, &format!("channels[{i}].type"), CHANNEL_TYPES);
    }
}

fn check_labels(check: &mut Checker<'_>, labels: &[String]) {
    for (i, label) in labels.iter().enumerate() {
        check.required(&format!("labels[{i}]"), label);
    }
}

impl Validate for SubscriptionDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check_channels(check, &self.channels);
        check.required("receiver", &self.receiver);
        check.required_without(
            "categories",
            !self.categories.is_empty(),
            "labels",
            !self.labels.is_empty(),
        );
        check_labels(check, &self.labels);
        check.ensure("resendLimit", self.resend_limit >= 0, "must not be negative");
        if !self.resend_interval.is_empty() {
            check.rules("resendInterval", &self.resend_interval, &[rules::FREQUENCY]);
        }
    }
}

impl Validate for UpdateSubscriptionDto {
    fn validate(&self, check: &mut Checker<'_>) {
        let has_id = is_given(&self.id);
        let has_name = is_given(&self.name);
        if check.required_without("id", has_id, "name", has_name) {
            check.optional_rules("id", self.id.as_deref(), &[rules::UUID]);
        }
        if check.required_without("name", has_name, "id", has_id) {
            check.optional_rules("name", self.name.as_deref(), &[rules::UNRESERVED_CHARS]);
        }
        if let Some(channels) = &self.channels {
            check_channels(check, channels);
        }
        check.optional_rules("receiver", self.receiver.as_deref(), &[rules::NONE_EMPTY_STRING]);
        // Only decidable here when both are sent; otherwise the stored subscription fills in.
        if let (Some(categories), Some(labels)) = (&self.categories, &self.labels) {
            check.ensure(
                "categories",
                !(categories.is_empty() && labels.is_empty()),
                "categories and labels must not both be empty",
            );
        }
        if let Some(labels) = &self.labels {
            check_labels(check, labels);
        }
        if let Some(limit) = self.resend_limit {
            check.ensure("resendLimit", limit >= 0, "must not be negative");
        }
        if let Some(interval) = self.resend_interval.as_deref().filter(|i| !i.is_empty()) {
            check.rules("resendInterval", interval, &[rules::FREQUENCY]);
        }
    }
}

impl From<SubscriptionDto> for Subscription {
    fn from(dto: SubscriptionDto) -> Self {
        Subscription {
            id: dto.id,
            name: dto.name,
            channels: dto.channels.into_iter().map(Into::into).collect(),
            receiver: dto.receiver,
            categories: dto.categories,
            labels: dto.labels,
            description: dto.description,
            resend_limit: dto.resend_limit,
            resend_interval: dto.resend_interval,
            admin_state: dto.admin_state,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<Subscription> for SubscriptionDto {
    fn from(sub: Subscription) -> Self {
        SubscriptionDto {
            created: sub.created,
            modified: sub.modified,
            id: sub.id,
            name: sub.name,
            channels: sub.channels.into_iter().map(Into::into).collect(),
            receiver: sub.receiver,
            categories: sub.categories,
            labels: sub.labels,
            description: sub.description,
            resend_limit: sub.resend_limit,
            resend_interval: sub.resend_interval,
            admin_state: sub.admin_state,
        }
    }
}

pub fn replace_subscription_model_fields_with_dto(sub: &mut Subscription, patch: UpdateSubscriptionDto) {
    if let Some(channels) = patch.channels {
        sub.channels = channels.into_iter().map(Into::into).collect();
    }
    if let Some(receiver) = patch.receiver {
        sub.receiver = receiver;
    }
    if let Some(categories) = patch.categories {
        sub.categories = categories;
    }
    if let Some(labels) = patch.labels {
        sub.labels = labels;
    }
    if let Some(description) = patch.description {
        sub.description = description;
    }
    if let Some(resend_limit) = patch.resend_limit {
        sub.resend_limit = resend_limit;
    }
    if let Some(resend_interval) = patch.resend_interval {
        sub.resend_interval = resend_interval;
    }
    if let Some(admin_state) = patch.admin_state {
        sub.admin_state = admin_state;
    }
}
