use super::request::Query;
use super::{client, RequestContext};
use crate::constants::routes::{ALL, COUNT, DEVICE, END, NAME, READING, RESOURCE_NAME, START};
use crate::dtos::responses::MultiReadingsResponse;
use crate::dtos::CountResponse;
use crate::errors::Result;

client!(ReadingClient => core_data_url);

impl ReadingClient {
    pub fn all_readings(&self, ctx: &RequestContext, offset: u32, limit: i32) -> Result<MultiReadingsResponse> {
        self.requester.get(ctx, &[READING, ALL], Query::paging(offset, limit))
    }

    pub fn reading_count(&self, ctx: &RequestContext) -> Result<CountResponse> {
        self.requester.get(ctx, &[READING, COUNT], Query::new())
    }

    pub fn reading_count_by_device_name(&self, ctx: &RequestContext, name: &str) -> Result<CountResponse> {
        self.requester.get(ctx, &[READING, COUNT, DEVICE, NAME, name], Query::new())
    }

    pub fn readings_by_device_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiReadingsResponse> {
        self.requester
            .get(ctx, &[READING, DEVICE, NAME, name], Query::paging(offset, limit))
    }

    pub fn readings_by_resource_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiReadingsResponse> {
        self.requester
            .get(ctx, &[READING, RESOURCE_NAME, name], Query::paging(offset, limit))
    }

    pub fn readings_by_time_range(
        &self,
        ctx: &RequestContext,
        start: i64,
        end: i64,
        offset: u32,
        limit: i32,
    ) -> Result<MultiReadingsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        self.requester.get(
            ctx,
            &[READING, START, start.as_str(), END, end.as_str()],
            Query::paging(offset, limit),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;

    use super::*;
    use crate::models::ReadingContent;

    #[test]
    fn test_readings_by_resource_name() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/reading/resourceName/Image")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "20".into()),
                Matcher::UrlEncoded("limit".into(), "20".into()),
            ]))
            .with_body(
                r#"{"apiVersion":"v2","statusCode":200,"totalCount":21,"readings":[{
                    "id":"3f5a0f6e-7b1c-4f0e-8d3e-2a1b0c9d8e7f","origin":1,
                    "deviceName":"camera","resourceName":"Image","profileName":"camera",
                    "valueType":"Binary","binaryValue":"AAEC","mediaType":"image/png"}]}"#,
            )
            .create();

        let client = ReadingClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let resp = client
            .readings_by_resource_name(&RequestContext::new(), "Image", 20, 20)
            .unwrap();
        assert_eq!(resp.total_count, 21);
        assert_eq!(
            resp.readings[0].content,
            ReadingContent::Binary {
                binary_value: vec![0, 1, 2],
                media_type: "image/png".to_string()
            }
        );
        mock.assert();
    }
}
