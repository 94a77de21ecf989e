use super::request::Query;
use super::{client, RequestContext};
use crate::constants::routes::{AGE, ALL, COUNT, DEVICE, END, EVENT, NAME, START};
use crate::dtos::requests::AddEventRequest;
use crate::dtos::responses::MultiEventsResponse;
use crate::dtos::{BaseResponse, BaseWithIdResponse, CountResponse, Versionable};
use crate::errors::Result;

client!(
    /// Events in core-data.
    EventClient => core_data_url
);

impl EventClient {
    /// Posted under the event's own profile, device and source names.
    pub fn add(&self, ctx: &RequestContext, request: AddEventRequest) -> Result<BaseWithIdResponse> {
        let request = request.with_default_api_version();
        let event = &request.event;
        self.requester.post(
            ctx,
            &[
                EVENT,
                event.profile_name.as_str(),
                event.device_name.as_str(),
                event.source_name.as_str(),
            ],
            &request,
        )
    }

    pub fn all_events(&self, ctx: &RequestContext, offset: u32, limit: i32) -> Result<MultiEventsResponse> {
        self.requester.get(ctx, &[EVENT, ALL], Query::paging(offset, limit))
    }

    pub fn event_count(&self, ctx: &RequestContext) -> Result<CountResponse> {
        self.requester.get(ctx, &[EVENT, COUNT], Query::new())
    }

    pub fn event_count_by_device_name(&self, ctx: &RequestContext, name: &str) -> Result<CountResponse> {
        self.requester.get(ctx, &[EVENT, COUNT, DEVICE, NAME, name], Query::new())
    }

    pub fn events_by_device_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiEventsResponse> {
        self.requester
            .get(ctx, &[EVENT, DEVICE, NAME, name], Query::paging(offset, limit))
    }

    pub fn delete_by_device_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[EVENT, DEVICE, NAME, name])
    }

    /// `start` and `end` are nanosecond timestamps.
    pub fn events_by_time_range(
        &self,
        ctx: &RequestContext,
        start: i64,
        end: i64,
        offset: u32,
        limit: i32,
    ) -> Result<MultiEventsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        self.requester.get(
            ctx,
            &[EVENT, START, start.as_str(), END, end.as_str()],
            Query::paging(offset, limit),
        )
    }

    /// Delete events older than `age` nanoseconds.
    pub fn delete_by_age(&self, ctx: &RequestContext, age: i64) -> Result<BaseResponse> {
        let age = age.to_string();
        self.requester.delete(ctx, &[EVENT, AGE, age.as_str()])
    }
}
