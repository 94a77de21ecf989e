use super::request;
use crate::dtos::{DeviceDto, UpdateDeviceDto};
use crate::models::Device;

request!(AddDeviceRequest { device: DeviceDto });
request!(
    /// PATCH payload; only the fields present in `device` change.
    UpdateDeviceRequest { device: UpdateDeviceDto }
);

pub fn add_device_requests_to_models(requests: Vec<AddDeviceRequest>) -> Vec<Device> {
    requests.into_iter().map(|r| Device::from(r.device)).collect()
}
