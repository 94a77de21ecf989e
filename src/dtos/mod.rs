//! Wire DTOs and their conversions to and from [`crate::models`].
//!
//! Each resource has a full DTO (used for adds and reads) and, where the
//! resource can be patched, an `Update*Dto` whose fields are all optional:
//! `None` leaves the model alone, `Some` overwrites it. For list fields
//! `Some(vec![])` clears the list.

mod address;
mod common;
mod device;
mod device_profile;
mod device_service;
mod event;
mod interval;
mod interval_action;
mod notification;
mod reading;
pub mod requests;
pub mod responses;
mod subscription;
mod transmission;

pub use address::{AddressDto, EmailAddressDto, MqttPubAddressDto, RestAddressDto};
pub use common::{
    BaseRequest, BaseResponse, BaseWithIdResponse, ConfigResponse, CountResponse, PingResponse,
    Versionable, VersionResponse,
};
pub use device::{replace_device_model_fields_with_dto, AutoEventDto, DeviceDto, UpdateDeviceDto};
pub use device_profile::{
    DeviceCommandDto, DeviceProfileDto, DeviceResourceDto, ResourceOperationDto,
    ResourcePropertiesDto,
};
pub use device_service::{
    replace_device_service_model_fields_with_dto, DeviceServiceDto, UpdateDeviceServiceDto,
};
pub use event::EventDto;
pub use interval::{replace_interval_model_fields_with_dto, IntervalDto, UpdateIntervalDto};
pub use interval_action::{
    replace_interval_action_model_fields_with_dto, IntervalActionDto, UpdateIntervalActionDto,
};
pub use notification::NotificationDto;
pub use reading::{ReadingDto, ReadingValue};
pub use subscription::{
    replace_subscription_model_fields_with_dto, SubscriptionDto, UpdateSubscriptionDto,
};
pub use transmission::{TransmissionDto, TransmissionRecordDto};

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// An optional identifier counts as given only when it has content.
pub(crate) fn is_given(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
