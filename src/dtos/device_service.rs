use serde::{Deserialize, Serialize};

use super::{is_given, is_zero};
use crate::models::{AdminState, DeviceService};
use crate::validation::{rules, Checker, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceServiceDto {
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
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_connected: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_reported: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub base_address: String,
    pub admin_state: AdminState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceServiceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_connected: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<AdminState>,
}

impl Validate for DeviceServiceDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check.rules(
            "baseAddress",
            &self.base_address,
            &[rules::NONE_EMPTY_STRING, rules::URI],
        );
    }
}

impl Validate for UpdateDeviceServiceDto {
    fn validate(&self, check: &mut Checker<'_>) {
        let has_id = is_given(&self.id);
        let has_name = is_given(&self.name);
        if check.required_without("id", has_id, "name", has_name) {
            check.optional_rules("id", self.id.as_deref(), &[rules::UUID]);
        }
        if check.required_without("name", has_name, "id", has_id) {
            check.optional_rules("name", self.name.as_deref(), &[rules::UNRESERVED_CHARS]);
        }
        check.optional_rules(
            "baseAddress",
            self.base_address.as_deref(),
            &[rules::NONE_EMPTY_STRING, rules::URI],
        );
    }
}

impl From<DeviceServiceDto> for DeviceService {
    fn from(dto: DeviceServiceDto) -> Self {
        DeviceService {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            labels: dto.labels,
            base_address: dto.base_address,
            admin_state: dto.admin_state,
            last_connected: dto.last_connected,
            last_reported: dto.last_reported,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<DeviceService> for DeviceServiceDto {
    fn from(service: DeviceService) -> Self {
        DeviceServiceDto {
            created: service.created,
            modified: service.modified,
            id: service.id,
            name: service.name,
            description: service.description,
            last_connected: service.last_connected,
            last_reported: service.last_reported,
            labels: service.labels,
            base_address: service.base_address,
            admin_state: service.admin_state,
        }
    }
}

pub fn replace_device_service_model_fields_with_dto(
    service: &mut DeviceService,
    patch: UpdateDeviceServiceDto,
) {
    if let Some(description) = patch.description {
        service.description = description;
    }
    if let Some(last_connected) = patch.last_connected {
        service.last_connected = last_connected;
    }
    if let Some(last_reported) = patch.last_reported {
        service.last_reported = last_reported;
    }
    if let Some(labels) = patch.labels {
        service.labels = labels;
    }
    if let Some(base_address) = patch.base_address {
        service.base_address = base_address;
    }
    if let Some(admin_state) = patch.admin_state {
        service.admin_state = admin_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn test_base_address_must_be_url() {
        let mut dto: DeviceServiceDto = serde_json::from_str(
            r#"{"name":"device-virtual","baseAddress":"http://edgex-device-virtual:59900","adminState":"UNLOCKED"}"#,
        )
        .unwrap();
        let validator = Validator::default();
        assert!(validator.validate(&dto).is_ok());

        dto.base_address = "edgex-device-virtual 59900".to_string();
        let err = validator.validate(&dto).unwrap_err();
        assert_eq!(err.violations()[0].field, "baseAddress");
    }

    #[test]
    fn test_update_labels_nil_versus_empty() {
        let mut service = DeviceService::from(DeviceServiceDto {
            created: 0,
            modified: 0,
            id: String::new(),
            name: "device-virtual".to_string(),
            description: String::new(),
            last_connected: 0,
            last_reported: 0,
            labels: vec!["virtual".to_string()],
            base_address: "http://localhost:59900".to_string(),
            admin_state: AdminState::Unlocked,
        });

        let untouched: UpdateDeviceServiceDto =
            serde_json::from_str(r#"{"name":"device-virtual"}"#).unwrap();
        replace_device_service_model_fields_with_dto(&mut service, untouched);
        assert_eq!(service.labels, vec!["virtual"]);

        let cleared: UpdateDeviceServiceDto =
            serde_json::from_str(r#"{"name":"device-virtual","labels":[]}"#).unwrap();
        replace_device_service_model_fields_with_dto(&mut service, cleared);
        assert!(service.labels.is_empty());
    }

    #[test]
    fn test_round_trip_through_model() {
        let dto: DeviceServiceDto = serde_json::from_str(
            r#"{"created":1700000000000,"id":"2f0b3c6e-1d4a-4e8b-9c7f-0a1b2c3d4e5f","name":"device-virtual",
                "description":"simulated devices","labels":["virtual"],"lastConnected":1700000000001,
                "baseAddress":"http://edgex-device-virtual:59900","adminState":"LOCKED"}"#,
        )
        .unwrap();
        let back = DeviceServiceDto::from(DeviceService::from(dto.clone()));
        assert_eq!(back, dto);
    }
}
