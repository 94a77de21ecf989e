use super::request::Query;
use super::{client, RequestContext};
use crate::constants::routes::{AGE, ALL, END, ID, NAME, START, STATUS, SUBSCRIPTION, TRANSMISSION};
use crate::dtos::responses::{MultiTransmissionsResponse, TransmissionResponse};
use crate::dtos::BaseResponse;
use crate::errors::Result;
use crate::models::TransmissionStatus;

client!(
    /// Read access to delivery records in support-notifications.
    TransmissionClient => support_notifications_url
);

impl TransmissionClient {
    pub fn transmission_by_id(&self, ctx: &RequestContext, id: &str) -> Result<TransmissionResponse> {
        self.requester.get(ctx, &[TRANSMISSION, ID, id], Query::new())
    }

    pub fn all_transmissions(
        &self,
        ctx: &RequestContext,
        offset: u32,
        limit: i32,
    ) -> Result<MultiTransmissionsResponse> {
        self.requester.get(ctx, &[TRANSMISSION, ALL], Query::paging(offset, limit))
    }

    pub fn transmissions_by_time_range(
        &self,
        ctx: &RequestContext,
        start: i64,
        end: i64,
        offset: u32,
        limit: i32,
    ) -> Result<MultiTransmissionsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        self.requester.get(
            ctx,
            &[TRANSMISSION, START, start.as_str(), END, end.as_str()],
            Query::paging(offset, limit),
        )
    }

    pub fn transmissions_by_status(
        &self,
        ctx: &RequestContext,
        status: TransmissionStatus,
        offset: u32,
        limit: i32,
    ) -> Result<MultiTransmissionsResponse> {
        self.requester.get(
            ctx,
            &[TRANSMISSION, STATUS, status.as_str()],
            Query::paging(offset, limit),
        )
    }

    pub fn transmissions_by_subscription_name(
        &self,
        ctx: &RequestContext,
        name: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiTransmissionsResponse> {
        self.requester.get(
            ctx,
            &[TRANSMISSION, SUBSCRIPTION, NAME, name],
            Query::paging(offset, limit),
        )
    }

    pub fn delete_processed_transmissions_by_age(&self, ctx: &RequestContext, age: i64) -> Result<BaseResponse> {
        let age = age.to_string();
        self.requester.delete(ctx, &[TRANSMISSION, AGE, age.as_str()])
    }
}
