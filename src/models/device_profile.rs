use std::collections::HashMap;

use super::{ReadWrite, ValueType};

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub model: String,
    pub labels: Vec<String>,
    pub device_resources: Vec<DeviceResource>,
    pub device_commands: Vec<DeviceCommand>,
    pub created: i64,
    pub modified: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceResource {
    pub description: String,
    pub name: String,
    pub is_hidden: bool,
    pub tag: String,
    pub properties: ResourceProperties,
    pub attributes: HashMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceProperties {
    pub value_type: ValueType,
    pub read_write: ReadWrite,
    pub units: String,
    pub minimum: String,
    pub maximum: String,
    pub default_value: String,
    pub mask: String,
    pub shift: String,
    pub scale: String,
    pub offset: String,
    pub base: String,
    pub assertion: String,
    pub media_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCommand {
    pub name: String,
    pub is_hidden: bool,
    pub read_write: ReadWrite,
    pub resource_operations: Vec<ResourceOperation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceOperation {
    pub device_resource: String,
    pub default_value: String,
    pub mappings: HashMap<String, String>,
}

impl DeviceProfile {
    pub fn resource(&self, name: &str) -> Option<&DeviceResource> {
        self.device_resources.iter().find(|r| r.name == name)
    }

    pub fn command(&self, name: &str) -> Option<&DeviceCommand> {
        self.device_commands.iter().find(|c| c.name == name)
    }
}
