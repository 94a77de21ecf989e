use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{is_zero, ReadingDto, ReadingValue};
use crate::helpers::now_nanos;
use crate::models::Event;
use crate::validation::{rules, Checker, Validate};

/// A batch of readings taken from one source of one device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub origin: i64,
    #[serde(default)]
    pub readings: Vec<ReadingDto>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl EventDto {
    /// Empty event with a fresh id, stamped with the current time.
    pub fn new(
        profile_name: impl Into<String>,
        device_name: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        EventDto {
            id: Uuid::new_v4().to_string(),
            device_name: device_name.into(),
            profile_name: profile_name.into(),
            source_name: source_name.into(),
            origin: now_nanos(),
            readings: Vec::new(),
            tags: HashMap::new(),
        }
    }

    pub fn add_simple_reading(&mut self, resource_name: &str, value: impl Into<ReadingValue>) {
        let mut reading = ReadingDto::simple(
            self.profile_name.as_str(),
            self.device_name.as_str(),
            resource_name,
            value,
        );
        reading.origin = self.origin;
        self.readings.push(reading);
    }

    pub fn add_binary_reading(&mut self, resource_name: &str, binary_value: Vec<u8>, media_type: &str) {
        let mut reading = ReadingDto::binary(
            self.profile_name.as_str(),
            self.device_name.as_str(),
            resource_name,
            binary_value,
            media_type,
        );
        reading.origin = self.origin;
        self.readings.push(reading);
    }
}

impl Validate for EventDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.rules("id", &self.id, &[rules::NONE_EMPTY_STRING, rules::UUID]);
        check.name("deviceName", &self.device_name);
        check.name("profileName", &self.profile_name);
        check.name("sourceName", &self.source_name);
        check.ensure("origin", self.origin != 0, "must not be zero");
        check.not_empty("readings", &self.readings);
        check.each("readings", &self.readings);
    }
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Event {
            id: dto.id,
            device_name: dto.device_name,
            profile_name: dto.profile_name,
            source_name: dto.source_name,
            origin: dto.origin,
            readings: dto.readings.into_iter().map(Into::into).collect(),
            tags: dto.tags,
        }
    }
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        EventDto {
            id: event.id,
            device_name: event.device_name,
            profile_name: event.profile_name,
            source_name: event.source_name,
            origin: event.origin,
            readings: event.readings.into_iter().map(Into::into).collect(),
            tags: event.tags,
        }
    }
}
