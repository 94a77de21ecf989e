use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, CHECK, DEVICE, NAME, PROFILE, SERVICE};
use crate::dtos::requests::{AddDeviceRequest, UpdateDeviceRequest};
use crate::dtos::responses::{DeviceResponse, MultiDevicesResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;

client!(
    /// Devices in core-metadata.
    DeviceClient => core_metadata_url
);

impl DeviceClient {
    pub fn add(&self, ctx: &RequestContext, requests: Vec<AddDeviceRequest>) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[DEVICE], &versioned(requests))
    }

    pub fn update(&self, ctx: &RequestContext, requests: Vec<UpdateDeviceRequest>) -> Result<Vec<BaseResponse>> {
        self.requester.patch(ctx, &[DEVICE], &versioned(requests))
    }

    pub fn all_devices(
        &self,
        ctx: &RequestContext,
        labels: &[String],
        offset: u32,
        limit: i32,
    ) -> Result<MultiDevicesResponse> {
        self.requester
            .get(ctx, &[DEVICE, ALL], Query::paging(offset, limit).labels(labels))
    }

    pub fn device_name_exists(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.get(ctx, &[DEVICE, CHECK, NAME, name], Query::new())
    }

    pub fn device_by_name(&self, ctx: &RequestContext, name: &str) -> Result<DeviceResponse> {
        self.requester.get(ctx, &[DEVICE, NAME, name], Query::new())
    }

    pub fn delete_device_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[DEVICE, NAME, name])
    }

    pub fn devices_by_profile_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiDevicesResponse> {
        self.requester
            .get(ctx, &[DEVICE, PROFILE, NAME, name], Query::paging(offset, limit))
    }

    pub fn devices_by_service_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiDevicesResponse> {
        self.requester
            .get(ctx, &[DEVICE, SERVICE, NAME, name], Query::paging(offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;

    use super::*;
    use crate::dtos::{BaseRequest, UpdateDeviceDto};
    use crate::errors::ErrKind;

    fn client(server: &mockito::Server) -> DeviceClient {
        DeviceClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_all_devices_query() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/device/all")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("labels".into(), "floor-1,hvac".into()),
            ]))
            .with_body(r#"{"apiVersion":"v2","statusCode":200,"totalCount":0,"devices":[]}"#)
            .create();

        let labels = vec!["floor-1".to_string(), "hvac".to_string()];
        let resp = client(&server).all_devices(&RequestContext::new(), &labels, 0, 10).unwrap();
        assert_eq!(resp.total_count, 0);
        mock.assert();
    }

    #[test]
    fn test_update_stamps_api_version() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PATCH", "/api/v2/device")
            .match_body(Matcher::PartialJson(serde_json::json!([
                {"apiVersion": "v2", "device": {"name": "pump-1", "adminState": "LOCKED"}}
            ])))
            .with_status(207)
            .with_body(r#"[{"apiVersion":"v2","statusCode":200}]"#)
            .create();

        let request = UpdateDeviceRequest {
            base: BaseRequest {
                api_version: String::new(),
                request_id: String::new(),
            },
            device: UpdateDeviceDto {
                name: Some("pump-1".to_string()),
                admin_state: Some(crate::models::AdminState::Locked),
                ..Default::default()
            },
        };
        let resp = client(&server).update(&RequestContext::new(), vec![request]).unwrap();
        assert_eq!(resp[0].status_code, 200);
        mock.assert();
    }

    #[test]
    fn test_device_by_name_not_found() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/v2/device/name/pump%201")
            .with_status(404)
            .with_body(r#"{"apiVersion":"v2","message":"device pump 1 does not exist","statusCode":404}"#)
            .create();
        let err = client(&server)
            .device_by_name(&RequestContext::new(), "pump 1")
            .unwrap_err();
        assert_eq!(err.kind(), ErrKind::EntityDoesNotExist);
        assert!(err.to_string().contains("device pump 1 does not exist"));
    }
}
