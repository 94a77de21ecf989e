use serde::{Deserialize, Serialize};

use super::{is_zero, AddressDto};
use crate::models::{Transmission, TransmissionRecord, TransmissionStatus};
use crate::validation::{rules, Checker, Validate};

/// Delivery of one notification to one subscription channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransmissionDto {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub notification_id: String,
    #[serde(default)]
    pub subscription_name: String,
    pub channel: AddressDto,
    pub status: TransmissionStatus,
    #[serde(default)]
    pub resend_count: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<TransmissionRecordDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransmissionRecordDto {
    pub status: TransmissionStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub response: String,
    #[serde(default)]
    pub sent: i64,
}

impl Validate for TransmissionDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.rules(
            "notificationId",
            &self.notification_id,
            &[rules::NONE_EMPTY_STRING, rules::UUID],
        );
        check.name("subscriptionName", &self.subscription_name);
        check.nested("channel", &self.channel);
        check.ensure("resendCount", self.resend_count >= 0, "must not be negative");
    }
}

impl From<TransmissionDto> for Transmission {
    fn from(dto: TransmissionDto) -> Self {
        Transmission {
            id: dto.id,
            created: dto.created,
            notification_id: dto.notification_id,
            subscription_name: dto.subscription_name,
            channel: dto.channel.into(),
            status: dto.status,
            resend_count: dto.resend_count,
            records: dto.records.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Transmission> for TransmissionDto {
    fn from(t: Transmission) -> Self {
        TransmissionDto {
            created: t.created,
            id: t.id,
            notification_id: t.notification_id,
            subscription_name: t.subscription_name,
            channel: t.channel.into(),
            status: t.status,
            resend_count: t.resend_count,
            records: t.records.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TransmissionRecordDto> for TransmissionRecord {
    fn from(dto: TransmissionRecordDto) -> Self {
        TransmissionRecord {
            status: dto.status,
            response: dto.response,
            sent: dto.sent,
        }
    }
}

impl From<TransmissionRecord> for TransmissionRecordDto {
    fn from(record: TransmissionRecord) -> Self {
        TransmissionRecordDto {
            status: record.status,
            response: record.response,
            sent: record.sent,
        }
    }
}
