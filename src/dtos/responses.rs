//! Per-resource response envelopes.
//!
//! Single responses carry one DTO under the resource's name; multi responses
//! carry a page of DTOs plus `totalCount`, the number of matches before
//! paging.

use serde::{Deserialize, Serialize};

use super::common::impl_versionable;
use super::{
    BaseResponse, DeviceDto, DeviceProfileDto, DeviceServiceDto, EventDto, IntervalActionDto,
    IntervalDto, NotificationDto, ReadingDto, SubscriptionDto, TransmissionDto,
};

macro_rules! responses {
    ($dto:ty => $single:ident { $one:ident }, $multi:ident { $many:ident }) => {
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $single {
            #[serde(flatten)]
            pub base: BaseResponse,
            pub $one: $dto,
        }

        impl $single {
            pub fn new(
                request_id: impl Into<String>,
                message: impl Into<String>,
                status_code: u16,
                $one: $dto,
            ) -> Self {
                $single {
                    base: BaseResponse::new(request_id, message, status_code),
                    $one,
                }
            }
        }

        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $multi {
            #[serde(flatten)]
            pub base: BaseResponse,
            #[serde(default)]
            pub total_count: u32,
            #[serde(default)]
            pub $many: Vec<$dto>,
        }

        impl $multi {
            pub fn new(
                request_id: impl Into<String>,
                message: impl Into<String>,
                status_code: u16,
                total_count: u32,
                $many: Vec<$dto>,
            ) -> Self {
                $multi {
                    base: BaseResponse::new(request_id, message, status_code),
                    total_count,
                    $many,
                }
            }
        }

        impl_versionable!($single => base, $multi => base);
    };
}

responses!(DeviceDto => DeviceResponse { device }, MultiDevicesResponse { devices });
responses!(DeviceProfileDto => DeviceProfileResponse { profile }, MultiDeviceProfilesResponse { profiles });
responses!(DeviceServiceDto => DeviceServiceResponse { service }, MultiDeviceServicesResponse { services });
responses!(EventDto => EventResponse { event }, MultiEventsResponse { events });
responses!(ReadingDto => ReadingResponse { reading }, MultiReadingsResponse { readings });
responses!(SubscriptionDto => SubscriptionResponse { subscription }, MultiSubscriptionsResponse { subscriptions });
responses!(NotificationDto => NotificationResponse { notification }, MultiNotificationsResponse { notifications });
responses!(TransmissionDto => TransmissionResponse { transmission }, MultiTransmissionsResponse { transmissions });
responses!(IntervalDto => IntervalResponse { interval }, MultiIntervalsResponse { intervals });
responses!(IntervalActionDto => IntervalActionResponse { action }, MultiIntervalActionsResponse { actions });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValueType;

    #[test]
    fn test_multi_readings_response() {
        let resp: MultiReadingsResponse = serde_json::from_str(
            r#"{
                "apiVersion": "v2",
                "statusCode": 200,
                "totalCount": 120,
                "readings": [{
                    "id": "9a4f0d8e-0f5c-4b8f-8a52-7d2b8c2d1e01",
                    "origin": 1700000000000000000,
                    "deviceName": "Random-Integer-Device",
                    "resourceName": "Int16",
                    "profileName": "Random-Integer-Device",
                    "valueType": "Int16",
                    "value": "-42"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.total_count, 120);
        assert_eq!(resp.readings[0].value_type, ValueType::Int16);
        assert!(resp.base.is_success());
    }

    #[test]
    fn test_empty_multi_response_defaults() {
        let resp: MultiDevicesResponse =
            serde_json::from_str(r#"{"apiVersion":"v2","statusCode":200}"#).unwrap();
        assert_eq!(resp.total_count, 0);
        assert!(resp.devices.is_empty());
    }
}
