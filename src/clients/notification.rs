use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{AGE, CATEGORY, END, ID, LABEL, NAME, NOTIFICATION, START, STATUS, SUBSCRIPTION};
use crate::dtos::requests::AddNotificationRequest;
use crate::dtos::responses::{MultiNotificationsResponse, NotificationResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;
use crate::models::{Category, NotificationStatus};

client!(NotificationClient => support_notifications_url);

impl NotificationClient {
    pub fn send_notification(
        &self,
        ctx: &RequestContext,
        requests: Vec<AddNotificationRequest>,
    ) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[NOTIFICATION], &versioned(requests))
    }

    pub fn notification_by_id(&self, ctx: &RequestContext, id: &str) -> Result<NotificationResponse> {
        self.requester.get(ctx, &[NOTIFICATION, ID, id], Query::new())
    }

    pub fn delete_notification_by_id(&self, ctx: &RequestContext, id: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[NOTIFICATION, ID, id])
    }

    pub fn notifications_by_category(
        &self,
        ctx: &RequestContext,
        category: Category,
        offset: u32,
        limit: i32,
    ) -> Result<MultiNotificationsResponse> {
        self.requester.get(
            ctx,
            &[NOTIFICATION, CATEGORY, category.as_str()],
            Query::paging(offset, limit),
        )
    }

    pub fn notifications_by_label(
        &self,
        ctx: &RequestContext,
        label: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiNotificationsResponse> {
        self.requester
            .get(ctx, &[NOTIFICATION, LABEL, label], Query::paging(offset, limit))
    }

    pub fn notifications_by_status(
        &self,
        ctx: &RequestContext,
        status: NotificationStatus,
        offset: u32,
        limit: i32,
    ) -> Result<MultiNotificationsResponse> {
        self.requester.get(
            ctx,
            &[NOTIFICATION, STATUS, status.as_str()],
            Query::paging(offset, limit),
        )
    }

    /// `start` and `end` are millisecond timestamps.
    pub fn notifications_by_time_range(
        &self,
        ctx: &RequestContext,
        start: i64,
        end: i64,
        offset: u32,
        limit: i32,
    ) -> Result<MultiNotificationsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        self.requester.get(
            ctx,
            &[NOTIFICATION, START, start.as_str(), END, end.as_str()],
            Query::paging(offset, limit),
        )
    }

    pub fn notifications_by_subscription_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiNotificationsResponse> {
        self.requester.get(
            ctx,
            &[NOTIFICATION, SUBSCRIPTION, NAME, name],
            Query::paging(offset, limit),
        )
    }

    /// Delete processed notifications older than `age` milliseconds.
    pub fn cleanup_notifications_by_age(&self, ctx: &RequestContext, age: i64) -> Result<BaseResponse> {
        let age = age.to_string();
        self.requester.delete(ctx, &[NOTIFICATION, AGE, age.as_str()])
    }
}
