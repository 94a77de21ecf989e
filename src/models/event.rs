use std::collections::HashMap;

use super::ValueType;

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub device_name: String,
    pub profile_name: String,
    pub source_name: String,
    /// Nanoseconds since the Unix epoch.
    pub origin: i64,
    pub readings: Vec<Reading>,
    pub tags: HashMap<String, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub base: BaseReading,
    pub content: ReadingContent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseReading {
    pub id: String,
    pub origin: i64,
    pub device_name: String,
    pub resource_name: String,
    pub profile_name: String,
    pub value_type: ValueType,
    pub units: String,
}

/// Payload of a reading; binary value types carry bytes, all others text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadingContent {
    Simple { value: String },
    Binary { binary_value: Vec<u8>, media_type: String },
}

impl Reading {
    pub fn is_binary(&self) -> bool {
        matches!(self.content, ReadingContent::Binary { .. })
    }

    pub fn simple_value(&self) -> Option<&str> {
        match &self.content {
            ReadingContent::Simple { value } => Some(value),
            ReadingContent::Binary { .. } => None,
        }
    }
}
