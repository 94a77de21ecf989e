//! Request envelopes: a [`BaseRequest`](crate::dtos::BaseRequest) flattened
//! next to the resource payload.
//!
//! Services receive these as raw bytes; [`decode`] and [`decode_batch`] turn
//! them into validated, value-type-normalized requests.

use serde::de::DeserializeOwned;

use crate::errors::{ErrKind, Error, Result};
use crate::validation::{Validate, Validator};

mod device;
mod device_profile;
mod device_service;
mod event;
mod interval;
mod interval_action;
mod notification;
mod subscription;

pub use device::{add_device_requests_to_models, AddDeviceRequest, UpdateDeviceRequest};
pub use device_profile::{device_profile_requests_to_models, DeviceProfileRequest};
pub use device_service::{
    add_device_service_requests_to_models, AddDeviceServiceRequest, UpdateDeviceServiceRequest,
};
pub use event::{add_event_request_to_model, AddEventRequest};
pub use interval::{add_interval_requests_to_models, AddIntervalRequest, UpdateIntervalRequest};
pub use interval_action::{
    add_interval_action_requests_to_models, AddIntervalActionRequest, UpdateIntervalActionRequest,
};
pub use notification::{add_notification_requests_to_models, AddNotificationRequest};
pub use subscription::{
    add_subscription_requests_to_models, AddSubscriptionRequest, UpdateSubscriptionRequest,
};

/// Declare a request envelope carrying one payload field.
macro_rules! request {
    ($(#[$meta:meta])* $name:ident { $field:ident: $dto:ty }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(flatten)]
            pub base: $crate::dtos::BaseRequest,
            pub $field: $dto,
        }

        impl $name {
            pub fn new($field: $dto) -> Self {
                $name {
                    base: $crate::dtos::BaseRequest::new(),
                    $field,
                }
            }
        }

        impl $crate::validation::Validate for $name {
            fn validate(&self, check: &mut $crate::validation::Checker<'_>) {
                check.nested("", &self.base);
                check.nested(stringify!($field), &self.$field);
            }
        }

        $crate::dtos::common::impl_versionable!($name => base);
    };
}
pub(crate) use request;

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Decode and validate a single request.
pub fn decode<T: DeserializeOwned + Validate>(body: &[u8], validator: &Validator) -> Result<T> {
    let name = short_type_name::<T>();
    let request: T = serde_json::from_slice(body).map_err(|e| {
        Error::wrap(ErrKind::ContractInvalid, format!("failed to decode {name}"), e)
    })?;
    validator
        .validate(&request)
        .map_err(|e| e.context(format!("{name} failed validation")))?;
    log::trace!("Decoded {}", name);
    Ok(request)
}

/// Decode and validate a JSON array of requests; violations are indexed by position.
pub fn decode_batch<T: DeserializeOwned + Validate>(
    body: &[u8],
    validator: &Validator,
) -> Result<Vec<T>> {
    let name = short_type_name::<T>();
    let requests: Vec<T> = serde_json::from_slice(body).map_err(|e| {
        Error::wrap(
            ErrKind::ContractInvalid,
            format!("failed to decode {name} batch"),
            e,
        )
    })?;
    validator
        .validate(&requests)
        .map_err(|e| e.context(format!("{name} batch failed validation")))?;
    log::trace!("Decoded {} x{}", name, requests.len());
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::Versionable;

    const DEVICE: &str = r#"{
        "apiVersion": "v2",
        "device": {
            "name": "Modbus-TCP-Device",
            "adminState": "LOCKED",
            "operatingState": "ENABLED",
            "serviceName": "device-modbus",
            "profileName": "Modbus-TCP-Profile",
            "protocols": {"modbus-ip": {"Address": "10.0.0.10", "Port": "502", "UnitID": "1"}}
        }
    }"#;

    #[test]
    fn test_decode_single() {
        let request: AddDeviceRequest = decode(DEVICE.as_bytes(), &Validator::default()).unwrap();
        assert_eq!(request.api_version(), "v2");
        assert_eq!(request.device.name, "Modbus-TCP-Device");
    }

    #[test]
    fn test_decode_batch_paths() {
        let body = format!("[{DEVICE}, {}]", DEVICE.replace("Modbus-TCP-Device", "bad name"));
        let err = decode_batch::<AddDeviceRequest>(body.as_bytes(), &Validator::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrKind::ContractInvalid);
        assert_eq!(err.violations()[0].field, "[1].device.name");
        assert!(err.message_chain().starts_with("AddDeviceRequest batch failed validation -> "));
    }

    #[test]
    fn test_malformed_json_is_contract_invalid() {
        let err = decode::<AddDeviceRequest>(b"{not json", &Validator::default()).unwrap_err();
        assert_eq!(err.kind(), ErrKind::ContractInvalid);
        assert!(err.message_chain().starts_with("failed to decode AddDeviceRequest -> "));
    }

    #[test]
    fn test_unknown_enum_token_is_contract_invalid() {
        let body = DEVICE.replace("LOCKED", "JAMMED");
        let err = decode::<AddDeviceRequest>(body.as_bytes(), &Validator::default()).unwrap_err();
        assert_eq!(err.kind(), ErrKind::ContractInvalid);
    }

    #[test]
    fn test_missing_api_version_fails_validation() {
        let body = DEVICE.replace(r#""apiVersion": "v2","#, "");
        let err = decode::<AddDeviceRequest>(body.as_bytes(), &Validator::default()).unwrap_err();
        assert_eq!(err.violations()[0].field, "apiVersion");
    }
}
