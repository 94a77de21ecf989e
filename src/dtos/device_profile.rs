use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::is_zero;
use crate::models::{
    DeviceCommand, DeviceProfile, DeviceResource, ReadWrite, ResourceOperation,
    ResourceProperties, ValueType,
};
use crate::validation::{Checker, Validate};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfileDto {
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
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub device_resources: Vec<DeviceResourceDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_commands: Vec<DeviceCommandDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResourceDto {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    pub properties: ResourcePropertiesDto,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePropertiesDto {
    pub value_type: ValueType,
    pub read_write: ReadWrite,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub minimum: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maximum: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mask: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shift: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scale: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub offset: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assertion: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommandDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
    pub read_write: ReadWrite,
    #[serde(default)]
    pub resource_operations: Vec<ResourceOperationDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOperationDto {
    #[serde(default)]
    pub device_resource: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub mappings: HashMap<String, String>,
}

impl Validate for DeviceProfileDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check.not_empty("deviceResources", &self.device_resources);
        check.each("deviceResources", &self.device_resources);
        check.unique(
            "deviceResources",
            self.device_resources.iter().map(|r| r.name.as_str()),
        );
        check.each("deviceCommands", &self.device_commands);
        check.unique(
            "deviceCommands",
            self.device_commands.iter().map(|c| c.name.as_str()),
        );

        // Commands and resources share one namespace, and a command may only
        // operate on resources of this profile.
        let resources: HashSet<&str> = self.device_resources.iter().map(|r| r.name.as_str()).collect();
        for (i, command) in self.device_commands.iter().enumerate() {
            check.ensure(
                &format!("deviceCommands[{i}].name"),
                !resources.contains(command.name.as_str()),
                format!("'{}' is already the name of a device resource", command.name),
            );
            for (j, operation) in command.resource_operations.iter().enumerate() {
                if operation.device_resource.trim().is_empty() {
                    continue;
                }
                check.ensure(
                    &format!("deviceCommands[{i}].resourceOperations[{j}].deviceResource"),
                    resources.contains(operation.device_resource.as_str()),
                    format!("references unknown device resource '{}'", operation.device_resource),
                );
            }
        }
    }
}

impl Validate for DeviceResourceDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.name("name", &self.name);
        check.nested("properties", &self.properties);
    }
}

impl Validate for ResourcePropertiesDto {
    fn validate(&self, check: &mut Checker<'_>) {
        if self.value_type == ValueType::Binary {
            check.required("mediaType", &self.media_type);
        }
    }
}

impl Validate for DeviceCommandDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.name("name", &self.name);
        check.not_empty("resourceOperations", &self.resource_operations);
        check.each("resourceOperations", &self.resource_operations);
    }
}

impl Validate for ResourceOperationDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.required("deviceResource", &self.device_resource);
    }
}

impl From<DeviceProfileDto> for DeviceProfile {
    fn from(dto: DeviceProfileDto) -> Self {
        DeviceProfile {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            manufacturer: dto.manufacturer,
            model: dto.model,
            labels: dto.labels,
            device_resources: dto.device_resources.into_iter().map(Into::into).collect(),
            device_commands: dto.device_commands.into_iter().map(Into::into).collect(),
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<DeviceProfile> for DeviceProfileDto {
    fn from(profile: DeviceProfile) -> Self {
        DeviceProfileDto {
            created: profile.created,
            modified: profile.modified,
            id: profile.id,
            name: profile.name,
            description: profile.description,
            manufacturer: profile.manufacturer,
            model: profile.model,
            labels: profile.labels,
            device_resources: profile.device_resources.into_iter().map(Into::into).collect(),
            device_commands: profile.device_commands.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DeviceResourceDto> for DeviceResource {
    fn from(dto: DeviceResourceDto) -> Self {
        DeviceResource {
            description: dto.description,
            name: dto.name,
            is_hidden: dto.is_hidden,
            tag: dto.tag,
            properties: dto.properties.into(),
            attributes: dto.attributes,
        }
    }
}

impl From<DeviceResource> for DeviceResourceDto {
    fn from(resource: DeviceResource) -> Self {
        DeviceResourceDto {
            description: resource.description,
            name: resource.name,
            is_hidden: resource.is_hidden,
            tag: resource.tag,
            properties: resource.properties.into(),
            attributes: resource.attributes,
        }
    }
}

impl From<ResourcePropertiesDto> for ResourceProperties {
    fn from(dto: ResourcePropertiesDto) -> Self {
        ResourceProperties {
            value_type: dto.value_type,
            read_write: dto.read_write,
            units: dto.units,
            minimum: dto.minimum,
            maximum: dto.maximum,
            default_value: dto.default_value,
            mask: dto.mask,
            shift: dto.shift,
            scale: dto.scale,
            offset: dto.offset,
            base: dto.base,
            assertion: dto.assertion,
            media_type: dto.media_type,
        }
    }
}

impl From<ResourceProperties> for ResourcePropertiesDto {
    fn from(props: ResourceProperties) -> Self {
        ResourcePropertiesDto {
            value_type: props.value_type,
            read_write: props.read_write,
            units: props.units,
            minimum: props.minimum,
            maximum: props.maximum,
            default_value: props.default_value,
            mask: props.mask,
            shift: props.shift,
            scale: props.scale,
            offset: props.offset,
            base: props.base,
            assertion: props.assertion,
            media_type: props.media_type,
        }
    }
}

impl From<DeviceCommandDto> for DeviceCommand {
    fn from(dto: DeviceCommandDto) -> Self {
        DeviceCommand {
            name: dto.name,
            is_hidden: dto.is_hidden,
            read_write: dto.read_write,
            resource_operations: dto.resource_operations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DeviceCommand> for DeviceCommandDto {
    fn from(command: DeviceCommand) -> Self {
        DeviceCommandDto {
            name: command.name,
            is_hidden: command.is_hidden,
            read_write: command.read_write,
            resource_operations: command.resource_operations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ResourceOperationDto> for ResourceOperation {
    fn from(dto: ResourceOperationDto) -> Self {
        ResourceOperation {
            device_resource: dto.device_resource,
            default_value: dto.default_value,
            mappings: dto.mappings,
        }
    }
}

impl From<ResourceOperation> for ResourceOperationDto {
    fn from(op: ResourceOperation) -> Self {
        ResourceOperationDto {
            device_resource: op.device_resource,
            default_value: op.default_value,
            mappings: op.mappings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    fn profile_dto() -> DeviceProfileDto {
        serde_json::from_str(
            r#"{
                "name": "Random-Integer-Device",
                "manufacturer": "IOTech",
                "model": "Device-Virtual-01",
                "deviceResources": [
                    {"name": "Int8", "properties": {"valueType": "int8", "readWrite": "RW", "defaultValue": "0"}},
                    {"name": "Image", "properties": {"valueType": "Binary", "readWrite": "R", "mediaType": "image/png"}}
                ],
                "deviceCommands": [
                    {"name": "Snapshot", "readWrite": "R", "resourceOperations": [{"deviceResource": "Image"}]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn fields(dto: &DeviceProfileDto) -> Vec<String> {
        match Validator::default().validate(dto) {
            Ok(()) => vec![],
            Err(err) => err.violations().iter().map(|v| v.field.clone()).collect(),
        }
    }

    #[test]
    fn test_value_type_normalized_on_decode() {
        let dto = profile_dto();
        assert_eq!(dto.device_resources[0].properties.value_type, ValueType::Int8);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["deviceResources"][0]["properties"]["valueType"], "Int8");
        assert!(fields(&dto).is_empty());
    }

    #[test]
    fn test_binary_resource_needs_media_type() {
        let mut dto = profile_dto();
        dto.device_resources[1].properties.media_type.clear();
        assert_eq!(fields(&dto), vec!["deviceResources[1].properties.mediaType"]);
    }

    #[test]
    fn test_duplicate_and_colliding_names() {
        let mut dto = profile_dto();
        dto.device_resources[1].name = "Int8".to_string();
        dto.device_commands[0].name = "Int8".to_string();
        assert_eq!(
            fields(&dto),
            vec![
                "deviceResources",
                "deviceCommands[0].name",
                "deviceCommands[0].resourceOperations[0].deviceResource",
            ]
        );
    }

    #[test]
    fn test_command_needs_operations() {
        let mut dto = profile_dto();
        dto.device_commands[0].resource_operations.clear();
        assert_eq!(fields(&dto), vec!["deviceCommands[0].resourceOperations"]);
    }

    #[test]
    fn test_round_trip_through_model() {
        let dto = profile_dto();
        let model = DeviceProfile::from(dto.clone());
        assert_eq!(
            model.resource("Image").map(|r| r.properties.value_type),
            Some(ValueType::Binary)
        );
        assert!(model.resource("Snapshot").is_none());
        assert_eq!(
            model.command("Snapshot").map(|c| c.resource_operations.len()),
            Some(1)
        );
        assert!(model.command("Int8").is_none());

        assert_eq!(DeviceProfileDto::from(model), dto);
    }
}
