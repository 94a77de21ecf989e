use serde::{Deserialize, Serialize};

use super::{is_given, is_zero};
use crate::models::Interval;
use crate::validation::{rules, Checker, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub run_once: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntervalDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_once: Option<bool>,
}

// An empty start or end leaves the interval unbounded on that side.
fn check_bound(check: &mut Checker<'_>, field: &str, value: &str) {
    if !value.is_empty() {
        check.rules(field, value, &[rules::INTERVAL_DATETIME]);
    }
}

impl Validate for IntervalDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.name("name", &self.name);
        check_bound(check, "start", &self.start);
        check_bound(check, "end", &self.end);
        check.rules(
            "frequency",
            &self.frequency,
            &[rules::NONE_EMPTY_STRING, rules::FREQUENCY],
        );
    }
}

impl Validate for UpdateIntervalDto {
    fn validate(&self, check: &mut Checker<'_>) {
        let has_id = is_given(&self.id);
        let has_name = is_given(&self.name);
        if check.required_without("id", has_id, "name", has_name) {
            check.optional_rules("id", self.id.as_deref(), &[rules::UUID]);
        }
        if check.required_without("name", has_name, "id", has_id) {
            check.optional_rules("name", self.name.as_deref(), &[rules::UNRESERVED_CHARS]);
        }
        if let Some(start) = &self.start {
            check_bound(check, "start", start);
        }
        if let Some(end) = &self.end {
            check_bound(check, "end", end);
        }
        check.optional_rules(
            "frequency",
            self.frequency.as_deref(),
            &[rules::NONE_EMPTY_STRING, rules::FREQUENCY],
        );
    }
}

impl From<IntervalDto> for Interval {
    fn from(dto: IntervalDto) -> Self {
        Interval {
            id: dto.id,
            name: dto.name,
            start: dto.start,
            end: dto.end,
            frequency: dto.frequency,
            run_once: dto.run_once,
            created: dto.created,
            modified: dto.modified,
        }
    }
}

impl From<Interval> for IntervalDto {
    fn from(interval: Interval) -> Self {
        IntervalDto {
            created: interval.created,
            modified: interval.modified,
            id: interval.id,
            name: interval.name,
            start: interval.start,
            end: interval.end,
            frequency: interval.frequency,
            run_once: interval.run_once,
        }
    }
}

pub fn replace_interval_model_fields_with_dto(interval: &mut Interval, patch: UpdateIntervalDto) {
    if let Some(start) = patch.start {
        interval.start = start;
    }
    if let Some(end) = patch.end {
        interval.end = end;
    }
    if let Some(frequency) = patch.frequency {
        interval.frequency = frequency;
    }
    if let Some(run_once) = patch.run_once {
        interval.run_once = run_once;
    }
}
