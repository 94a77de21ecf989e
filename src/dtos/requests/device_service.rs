use super::request;
use crate::dtos::{DeviceServiceDto, UpdateDeviceServiceDto};
use crate::models::DeviceService;

request!(AddDeviceServiceRequest { service: DeviceServiceDto });
request!(UpdateDeviceServiceRequest { service: UpdateDeviceServiceDto });

pub fn add_device_service_requests_to_models(
    requests: Vec<AddDeviceServiceRequest>,
) -> Vec<DeviceService> {
    requests.into_iter().map(|r| DeviceService::from(r.service)).collect()
}
