use serde::{Deserialize, Serialize};

use super::{is_given, is_zero, AddressDto};
use crate::models::{AdminState, IntervalAction, MQTT, REST};
use crate::validation::{rules, Checker, Validate};

const ACTION_ADDRESS_TYPES: &[&str] = &[REST, MQTT];

/// What the scheduler does each time an interval fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalActionDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interval_name: String,
    pub address: AddressDto,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    pub admin_state: AdminState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntervalActionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

impl Validate for IntervalActionDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check.name("intervalName", &self.interval_name);
        check.nested("address", &self.address);
        self.address.check_type(check, "address.type", ACTION_ADDRESS_TYPES);
    }
}

impl Validate for UpdateIntervalActionDto {
    fn validate(&self, check: &mut Checker<'_>) {
        let has_id = is_given(&self.id);
        let has_name = is_given(&self.name);
        if check.required_without("id", has_id, "name", has_name) {
            check.optional_rules("id", self.id.as_deref(), &[rules::UUID]);
        }
        if check.required_without("name", has_name, "id", has_id) {
            check.optional_rules("name", self.name.as_deref(), &[rules::UNRESERVED_CHARS]);
        }
        check.optional_rules("intervalName", self.interval_name.as_deref(), &[rules::UNRESERVED_CHARS]);
        if let Some(address) = &self.address {
            check.nested("address", address);
            address.check_type(check, "address.type", ACTION_ADDRESS_TYPES);
        }
    }
}

impl From<IntervalActionDto> for IntervalAction {
    fn from(dto: IntervalActionDto) -> Self {
        IntervalAction {
            id: dto.id,
            name: dto.name,
            interval_name: dto.interval_name,
            address: dto.address.into(),
            content: dto.content,
            content_type: dto.content_type,
            admin_state: dto.admin_state,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<IntervalAction> for IntervalActionDto {
    fn from(action: IntervalAction) -> Self {
        IntervalActionDto {
            created: action.created,
            modified: action.modified,
            id: action.id,
            name: action.name,
            interval_name: action.interval_name,
            address: action.address.into(),
            content: action.content,
            content_type: action.content_type,
            admin_state: action.admin_state,
        }
    }
}

pub fn replace_interval_action_model_fields_with_dto(
    action: &mut IntervalAction,
    patch: UpdateIntervalActionDto,
) {
    if let Some(interval_name) = patch.interval_name {
        action.interval_name = interval_name;
    }
    if let Some(address) = patch.address {
        action.address = address.into();
    }
    if let Some(content) = patch.content {
        action.content = content;
    }
    if let Some(content_type) = patch.content_type {
        action.content_type = content_type;
    }
    if let Some(admin_state) = patch.admin_state {
        action.admin_state = admin_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn test_email_address_not_allowed() {
        let dto: IntervalActionDto = serde_json::from_str(
            r#"{
                "name": "scrub-events",
                "intervalName": "midnight",
                "address": {"type": "EMAIL", "recipients": ["ops@example.com"]},
                "adminState": "UNLOCKED"
            }"#,
        )
        .unwrap();
        let err = Validator::default().validate(&dto).unwrap_err();
        assert_eq!(err.violations()[0].field, "address.type");
    }

    #[test]
    fn test_rest_action_is_valid() {
        let dto: IntervalActionDto = serde_json::from_str(
            r#"{
                "name": "scrub-events",
                "intervalName": "midnight",
                "address": {"type": "REST", "host": "edgex-core-data", "port": 59880, "path": "/api/v2/event/age/0", "httpMethod": "DELETE"},
                "adminState": "UNLOCKED"
            }"#,
        )
        .unwrap();
        assert!(Validator::default().validate(&dto).is_ok());
    }

    fn mqtt_action_dto() -> IntervalActionDto {
        serde_json::from_str(
            r#"{
                "name": "publish-heartbeat",
                "intervalName": "every-minute",
                "address": {"type": "MQTT", "host": "broker.local", "port": 1883, "publisher": "scheduler",
                            "topic": "heartbeat", "qos": 1, "keepAlive": 60, "retained": true},
                "content": "{\"alive\":true}",
                "contentType": "application/json",
                "adminState": "UNLOCKED"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip_through_model() {
        let dto = mqtt_action_dto();
        assert!(Validator::default().validate(&dto).is_ok());
        let back = IntervalActionDto::from(IntervalAction::from(dto.clone()));
        assert_eq!(back, dto);
    }

    #[test]
    fn test_replace_absent_keeps_and_present_overwrites() {
        let mut action = IntervalAction::from(mqtt_action_dto());
        let original = action.clone();

        let untouched: UpdateIntervalActionDto =
            serde_json::from_str(r#"{"name":"publish-heartbeat"}"#).unwrap();
        replace_interval_action_model_fields_with_dto(&mut action, untouched);
        assert_eq!(action, original);

        let patch: UpdateIntervalActionDto = serde_json::from_str(
            r#"{
                "name": "renamed",
                "intervalName": "hourly",
                "address": {"type": "REST", "host": "edgex-core-data", "port": 59880, "httpMethod": "DELETE"},
                "adminState": "LOCKED"
            }"#,
        )
        .unwrap();
        replace_interval_action_model_fields_with_dto(&mut action, patch);
        assert_eq!(action.name, "publish-heartbeat");
        assert_eq!(action.interval_name, "hourly");
        assert_eq!(action.address.address_type(), crate::models::REST);
        assert_eq!(action.admin_state, AdminState::Locked);
        assert_eq!(action.content, original.content);
        assert_eq!(action.content_type, "application/json");
    }
}
