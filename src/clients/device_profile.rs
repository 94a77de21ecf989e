use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, DEVICE_PROFILE, MANUFACTURER, MODEL, NAME};
use crate::dtos::requests::DeviceProfileRequest;
use crate::dtos::responses::{DeviceProfileResponse, MultiDeviceProfilesResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;

client!(DeviceProfileClient => core_metadata_url);

impl DeviceProfileClient {
    pub fn add(&self, ctx: &RequestContext, requests: Vec<DeviceProfileRequest>) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[DEVICE_PROFILE], &versioned(requests))
    }

    /// Replaces whole profiles.
    pub fn update(&self, ctx: &RequestContext, requests: Vec<DeviceProfileRequest>) -> Result<Vec<BaseResponse>> {
        self.requester.put(ctx, &[DEVICE_PROFILE], &versioned(requests))
    }

    pub fn delete_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[DEVICE_PROFILE, NAME, name])
    }

    pub fn device_profile_by_name(&self, ctx: &RequestContext, name: &str) -> Result<DeviceProfileResponse> {
        self.requester.get(ctx, &[DEVICE_PROFILE, NAME, name], Query::new())
    }

    pub fn all_device_profiles(
        &self,
        ctx: &RequestContext,
        labels: &[String],
        offset: u32,
        limit: i32,
    ) -> Result<MultiDeviceProfilesResponse> {
        self.requester
            .get(ctx, &[DEVICE_PROFILE, ALL], Query::paging(offset, limit).labels(labels))
    }

    pub fn device_profiles_by_model(
        &self,
        ctx: &RequestContext,
        model: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiDeviceProfilesResponse> {
        self.requester
            .get(ctx, &[DEVICE_PROFILE, MODEL, model], Query::paging(offset, limit))
    }

    pub fn device_profiles_by_manufacturer(
        &self,
        ctx: &RequestContext,
        manufacturer: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiDeviceProfilesResponse> {
        self.requester.get(
            ctx,
            &[DEVICE_PROFILE, MANUFACTURER, manufacturer],
            Query::paging(offset, limit),
        )
    }

    pub fn device_profiles_by_manufacturer_and_model(
        &self,
        ctx: &RequestContext,
        manufacturer: &str,
        model: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiDeviceProfilesResponse> {
        self.requester.get(
            ctx,
            &[DEVICE_PROFILE, MANUFACTURER, manufacturer, MODEL, model],
            Query::paging(offset, limit),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_manufacturer_and_model_route() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/deviceprofile/manufacturer/IOTech/model/Virtual%2001")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"apiVersion":"v2","statusCode":200,"totalCount":0,"profiles":[]}"#)
            .create();
        let client = DeviceProfileClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let resp = client
            .device_profiles_by_manufacturer_and_model(&RequestContext::new(), "IOTech", "Virtual 01", 0, -1)
            .unwrap();
        assert!(resp.profiles.is_empty());
        mock.assert();
    }

    #[test]
    fn test_update_uses_put() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v2/deviceprofile")
            .with_body("[]")
            .create();
        let client = DeviceProfileClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        client.update(&RequestContext::new(), vec![]).unwrap();
        mock.assert();
    }
}
