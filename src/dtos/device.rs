use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{is_given, is_zero};
use crate::models::{AdminState, AutoEvent, Device, OperatingState, ProtocolProperties};
use crate::validation::{rules, Checker, Validate};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub admin_state: AdminState,
    pub operating_state: OperatingState,
    #[serde(default)]
    pub protocols: HashMap<String, ProtocolProperties>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_connected: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_reported: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_events: Vec<AutoEventDto>,
    #[serde(default)]
    pub notify: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoEventDto {
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub on_change: bool,
    #[serde(default)]
    pub resource: String,
}

/// Partial device; identified by `id` or, failing that, `name`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_state: Option<OperatingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_connected: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<HashMap<String, ProtocolProperties>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_events: Option<Vec<AutoEventDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
}

impl Validate for DeviceDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check.name("serviceName", &self.service_name);
        check.name("profileName", &self.profile_name);
        check.ensure(
            "protocols",
            !self.protocols.is_empty(),
            "must contain at least one entry",
        );
        check.each("autoEvents", &self.auto_events);
    }
}

impl Validate for AutoEventDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.rules(
            "frequency",
            &self.frequency,
            &[rules::NONE_EMPTY_STRING, rules::FREQUENCY],
        );
        check.required("resource", &self.resource);
    }
}

impl Validate for UpdateDeviceDto {
    fn validate(&self, check: &mut Checker<'_>) {
        let has_id = is_given(&self.id);
        let has_name = is_given(&self.name);
        if check.required_without("id", has_id, "name", has_name) {
            check.optional_rules("id", self.id.as_deref(), &[rules::UUID]);
        }
        if check.required_without("name", has_name, "id", has_id) {
            check.optional_rules("name", self.name.as_deref(), &[rules::UNRESERVED_CHARS]);
        }
        check.optional_rules("serviceName", self.service_name.as_deref(), &[rules::UNRESERVED_CHARS]);
        check.optional_rules("profileName", self.profile_name.as_deref(), &[rules::UNRESERVED_CHARS]);
        if let Some(protocols) = &self.protocols {
            check.ensure("protocols", !protocols.is_empty(), "must contain at least one entry");
        }
        if let Some(auto_events) = &self.auto_events {
            check.each("autoEvents", auto_events);
        }
    }
}

impl From<DeviceDto> for Device {
    fn from(dto: DeviceDto) -> Self {
        Device {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            admin_state: dto.admin_state,
            operating_state: dto.operating_state,
            protocols: dto.protocols,
            last_connected: dto.last_connected,
            last_reported: dto.last_reported,
            labels: dto.labels,
            location: dto.location,
            service_name: dto.service_name,
            profile_name: dto.profile_name,
            auto_events: dto.auto_events.into_iter().map(AutoEvent::from).collect(),
            notify: dto.notify,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<Device> for DeviceDto {
    fn from(device: Device) -> Self {
        DeviceDto {
            created: device.created,
            modified: device.modified,
            id: device.id,
            name: device.name,
            description: device.description,
            admin_state: device.admin_state,
            operating_state: device.operating_state,
            protocols: device.protocols,
            last_connected: device.last_connected,
            last_reported: device.last_reported,
            labels: device.labels,
            location: device.location,
            service_name: device.service_name,
            profile_name: device.profile_name,
            auto_events: device.auto_events.into_iter().map(AutoEventDto::from).collect(),
            notify: device.notify,
        }
    }
}

impl From<AutoEventDto> for AutoEvent {
    fn from(dto: AutoEventDto) -> Self {
        AutoEvent {
            frequency: dto.frequency,
            on_change: dto.on_change,
            resource: dto.resource,
        }
    }
}

impl From<AutoEvent> for AutoEventDto {
    fn from(auto_event: AutoEvent) -> Self {
        AutoEventDto {
            frequency: auto_event.frequency,
            on_change: auto_event.on_change,
            resource: auto_event.resource,
        }
    }
}

/// Apply the fields present in `patch`. Identity (`id`, `name`) is never touched.
pub fn replace_device_model_fields_with_dto(device: &mut Device, patch: UpdateDeviceDto) {
    if let Some(description) = patch.description {
        device.description = description;
    }
    if let Some(admin_state) = patch.admin_state {
        device.admin_state = admin_state;
    }
    if let Some(operating_state) = patch.operating_state {
        device.operating_state = operating_state;
    }
    if let Some(last_connected) = patch.last_connected {
        device.last_connected = last_connected;
    }
    if let Some(last_reported) = patch.last_reported {
        device.last_reported = last_reported;
    }
    if let Some(labels) = patch.labels {
        device.labels = labels;
    }
    if let Some(location) = patch.location {
        device.location = Some(location);
    }
    if let Some(service_name) = patch.service_name {
        device.service_name = service_name;
    }
    if let Some(profile_name) = patch.profile_name {
        device.profile_name = profile_name;
    }
    if let Some(protocols) = patch.protocols {
        device.protocols = protocols;
    }
    if let Some(auto_events) = patch.auto_events {
        device.auto_events = auto_events.into_iter().map(AutoEvent::from).collect();
    }
    if let Some(notify) = patch.notify {
        device.notify = notify;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    fn device_dto() -> DeviceDto {
        serde_json::from_str(
            r#"{
                "name": "Random-Integer-Device",
                "adminState": "UNLOCKED",
                "operatingState": "ENABLED",
                "protocols": {"other": {"Address": "simple01", "Port": "300"}},
                "labels": ["device-random-example"],
                "serviceName": "device-virtual",
                "profileName": "Random-Integer-Device",
                "autoEvents": [{"frequency": "15s", "resource": "Int8"}]
            }"#,
        )
        .unwrap()
    }

    fn fields(err: crate::errors::Error) -> Vec<String> {
        err.violations().iter().map(|v| v.field.clone()).collect()
    }

    #[test]
    fn test_valid_device() {
        assert!(Validator::default().validate(&device_dto()).is_ok());
    }

    #[test]
    fn test_device_violations() {
        let mut dto = device_dto();
        dto.id = "123".to_string();
        dto.service_name = String::new();
        dto.protocols.clear();
        dto.auto_events[0].frequency = "often".to_string();
        dto.auto_events.push(AutoEventDto::default());

        let err = Validator::default().validate(&dto).unwrap_err();
        assert_eq!(
            fields(err),
            vec![
                "id",
                "serviceName",
                "protocols",
                "autoEvents[0].frequency",
                "autoEvents[1].frequency",
                "autoEvents[1].resource",
            ]
        );
    }

    #[test]
    fn test_unknown_admin_state_fails_decode() {
        let json = r#"{"name":"d","adminState":"BROKEN","operatingState":"ENABLED"}"#;
        assert!(serde_json::from_str::<DeviceDto>(json).is_err());
    }

    #[test]
    fn test_update_needs_id_or_name() {
        let validator = Validator::default();
        let err = validator.validate(&UpdateDeviceDto::default()).unwrap_err();
        assert_eq!(fields(err), vec!["id", "name"]);

        let by_name = UpdateDeviceDto {
            name: Some("Random-Integer-Device".to_string()),
            ..Default::default()
        };
        assert!(validator.validate(&by_name).is_ok());

        let bad_id = UpdateDeviceDto {
            id: Some("nope".to_string()),
            ..Default::default()
        };
        assert_eq!(fields(validator.validate(&bad_id).unwrap_err()), vec!["id"]);
    }

    #[test]
    fn test_replace_fields_keeps_identity() {
        let mut device = Device::from(device_dto());
        device.id = "c5a4c1b1-3b5e-4c6d-8e7f-0a1b2c3d4e5f".to_string();

        let patch = UpdateDeviceDto {
            id: Some("00000000-0000-0000-0000-000000000000".to_string()),
            name: Some("Renamed".to_string()),
            admin_state: Some(AdminState::Locked),
            labels: Some(vec![]),
            ..Default::default()
        };
        replace_device_model_fields_with_dto(&mut device, patch);

        assert_eq!(device.id, "c5a4c1b1-3b5e-4c6d-8e7f-0a1b2c3d4e5f");
        assert_eq!(device.name, "Random-Integer-Device");
        assert!(device.is_locked());
        assert!(device.labels.is_empty());
        assert_eq!(device.service_name, "device-virtual");
        assert_eq!(device.auto_events.len(), 1);
    }

    #[test]
    fn test_model_round_trip() {
        let dto = device_dto();
        assert_eq!(DeviceDto::from(Device::from(dto.clone())), dto);
    }
}
