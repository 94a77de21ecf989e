use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, INTERVAL_ACTION, NAME};
use crate::dtos::requests::{AddIntervalActionRequest, UpdateIntervalActionRequest};
use crate::dtos::responses::{IntervalActionResponse, MultiIntervalActionsResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;

client!(IntervalActionClient => support_scheduler_url);

impl IntervalActionClient {
    pub fn add(
        &self,
        ctx: &RequestContext,
        requests: Vec<AddIntervalActionRequest>,
    ) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[INTERVAL_ACTION], &versioned(requests))
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        requests: Vec<UpdateIntervalActionRequest>,
    ) -> Result<Vec<BaseResponse>> {
        self.requester.patch(ctx, &[INTERVAL_ACTION], &versioned(requests))
    }

    pub fn all_interval_actions(
        &self,
        ctx: &RequestContext,
        offset: u32,
        limit: i32,
    ) -> Result<MultiIntervalActionsResponse> {
        self.requester.get(ctx, &[INTERVAL_ACTION, ALL], Query::paging(offset, limit))
    }

    pub fn interval_action_by_name(&self, ctx: &RequestContext, name: &str) -> Result<IntervalActionResponse> {
        self.requester.get(ctx, &[INTERVAL_ACTION, NAME, name], Query::new())
    }

    pub fn delete_interval_action_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[INTERVAL_ACTION, NAME, name])
    }
}
