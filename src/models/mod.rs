//! Domain models.
//!
//! Plain records the services work with internally. They carry no wire
//! concerns; see [`crate::dtos`] for the JSON shapes and the conversions.

mod address;
mod common;
mod device;
mod device_profile;
mod device_service;
mod event;
mod interval;
mod interval_action;
mod notification;
mod subscription;
mod transmission;
mod value_type;

pub use address::{Address, EmailAddress, MqttPubAddress, RestAddress, EMAIL, MQTT, REST};
pub use common::{
    AdminState, Category, HttpMethod, NotificationStatus, OperatingState, ReadWrite, Severity,
    TransmissionStatus,
};
pub use device::{AutoEvent, Device, ProtocolProperties};
pub use device_profile::{
    DeviceCommand, DeviceProfile, DeviceResource, ResourceOperation, ResourceProperties,
};
pub use device_service::DeviceService;
pub use event::{BaseReading, Event, Reading, ReadingContent};
pub use interval::Interval;
pub use interval_action::IntervalAction;
pub use notification::Notification;
pub use subscription::Subscription;
pub use transmission::{Transmission, TransmissionRecord};
pub use value_type::{normalize_value_type, ValueType};
