use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, DEVICE_SERVICE, NAME};
use crate::dtos::requests::{AddDeviceServiceRequest, UpdateDeviceServiceRequest};
use crate::dtos::responses::{DeviceServiceResponse, MultiDeviceServicesResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;

client!(DeviceServiceClient => core_metadata_url);

impl DeviceServiceClient {
    pub fn add(
        &self,
        ctx: &RequestContext,
        requests: Vec<AddDeviceServiceRequest>,
    ) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[DEVICE_SERVICE], &versioned(requests))
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        requests: Vec<UpdateDeviceServiceRequest>,
    ) -> Result<Vec<BaseResponse>> {
        self.requester.patch(ctx, &[DEVICE_SERVICE], &versioned(requests))
    }

    pub fn all_device_services(
        &self,
        ctx: &RequestContext,
        labels: &[String],
        offset: u32,
        limit: i32,
    ) -> Result<MultiDeviceServicesResponse> {
        self.requester
            .get(ctx, &[DEVICE_SERVICE, ALL], Query::paging(offset, limit).labels(labels))
    }

    pub fn device_service_by_name(&self, ctx: &RequestContext, name: &str) -> Result<DeviceServiceResponse> {
        self.requester.get(ctx, &[DEVICE_SERVICE, NAME, name], Query::new())
    }

    pub fn delete_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[DEVICE_SERVICE, NAME, name])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dtos::DeviceServiceDto;
    use crate::models::AdminState;

    #[test]
    fn test_add_returns_assigned_ids() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v2/deviceservice")
            .with_status(207)
            .with_body(r#"[{"apiVersion":"v2","statusCode":201,"id":"2d6b0a3e-5a0c-4b0f-9e61-0c7b0e2b6f10"}]"#)
            .create();
        let client = DeviceServiceClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let request = AddDeviceServiceRequest::new(DeviceServiceDto {
            created: 0,
            modified: 0,
            id: String::new(),
            name: "device-modbus".to_string(),
            description: String::new(),
            last_connected: 0,
            last_reported: 0,
            labels: vec![],
            base_address: "http://edgex-device-modbus:59901".to_string(),
            admin_state: AdminState::Unlocked,
        });
        let resp = client.add(&RequestContext::new(), vec![request]).unwrap();
        assert_eq!(resp[0].base.status_code, 201);
        assert_eq!(resp[0].id, "2d6b0a3e-5a0c-4b0f-9e61-0c7b0e2b6f10");
        mock.assert();
    }
}
