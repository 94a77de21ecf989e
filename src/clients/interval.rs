use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, INTERVAL, NAME};
use crate::dtos::requests::{AddIntervalRequest, UpdateIntervalRequest};
use crate::dtos::responses::{IntervalResponse, MultiIntervalsResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;

client!(
    /// Intervals in support-scheduler.
    IntervalClient => support_scheduler_url
);

impl IntervalClient {
    pub fn add(&self, ctx: &RequestContext, requests: Vec<AddIntervalRequest>) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[INTERVAL], &versioned(requests))
    }

    pub fn update(&self, ctx: &RequestContext, requests: Vec<UpdateIntervalRequest>) -> Result<Vec<BaseResponse>> {
        self.requester.patch(ctx, &[INTERVAL], &versioned(requests))
    }

    pub fn all_intervals(&self, ctx: &RequestContext, offset: u32, limit: i32) -> Result<MultiIntervalsResponse> {
        self.requester.get(ctx, &[INTERVAL, ALL], Query::paging(offset, limit))
    }

    pub fn interval_by_name(&self, ctx: &RequestContext, name: &str) -> Result<IntervalResponse> {
        self.requester.get(ctx, &[INTERVAL, NAME, name], Query::new())
    }

    pub fn delete_interval_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[INTERVAL, NAME, name])
    }
}
