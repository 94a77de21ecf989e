use super::request::Query;
use super::{client, versioned, RequestContext};
use crate::constants::routes::{ALL, CATEGORY, LABEL, NAME, RECEIVER, SUBSCRIPTION};
use crate::dtos::requests::{AddSubscriptionRequest, UpdateSubscriptionRequest};
use crate::dtos::responses::{MultiSubscriptionsResponse, SubscriptionResponse};
use crate::dtos::{BaseResponse, BaseWithIdResponse};
use crate::errors::Result;
use crate::models::Category;

client!(
    /// Subscriptions in support-notifications.
    SubscriptionClient => support_notifications_url
);

impl SubscriptionClient {
    pub fn add(
        &self,
        ctx: &RequestContext,
        requests: Vec<AddSubscriptionRequest>,
    ) -> Result<Vec<BaseWithIdResponse>> {
        self.requester.post(ctx, &[SUBSCRIPTION], &versioned(requests))
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        requests: Vec<UpdateSubscriptionRequest>,
    ) -> Result<Vec<BaseResponse>> {
        self.requester.patch(ctx, &[SUBSCRIPTION], &versioned(requests))
    }

    pub fn all_subscriptions(
        &self,
        ctx: &RequestContext,
        offset: u32,
        limit: i32,
    ) -> Result<MultiSubscriptionsResponse> {
        self.requester.get(ctx, &[SUBSCRIPTION, ALL], Query::paging(offset, limit))
    }

    pub fn subscriptions_by_category(
        &self,
        ctx: &RequestContext,
        category: Category,
        offset: u32,
        limit: i32,
    ) -> Result<MultiSubscriptionsResponse> {
        self.requester.get(
            ctx,
            &[SUBSCRIPTION, CATEGORY, category.as_str()],
            Query::paging(offset, limit),
        )
    }

    pub fn subscriptions_by_label(
        &self,
        ctx: &RequestContext,
        label: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiSubscriptionsResponse> {
        self.requester
            .get(ctx, &[SUBSCRIPTION, LABEL, label], Query::paging(offset, limit))
    }

    pub fn subscriptions_by_receiver(
        &self,
        ctx: &RequestContext,
        receiver: &str,
        offset: u32,
        limit: i32,
    ) -> Result<MultiSubscriptionsResponse> {
        self.requester
            .get(ctx, &[SUBSCRIPTION, RECEIVER, receiver], Query::paging(offset, limit))
    }

    pub fn subscription_by_name(&self, ctx: &RequestContext, name: &str) -> Result<SubscriptionResponse> {
        self.requester.get(ctx, &[SUBSCRIPTION, NAME, name], Query::new())
    }

    pub fn delete_subscription_by_name(&self, ctx: &RequestContext, name: &str) -> Result<BaseResponse> {
        self.requester.delete(ctx, &[SUBSCRIPTION, NAME, name])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_by_category_uses_wire_token() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/subscription/category/HW_HEALTH")
            .match_query(mockito::Matcher::Any)
            .with_body(
                r#"{"apiVersion":"v2","statusCode":200,"totalCount":1,"subscriptions":[{
                    "name":"ops-email","receiver":"ops",
                    "channels":[{"type":"EMAIL","recipients":["ops@example.com"]}],
                    "categories":["HW_HEALTH"],"adminState":"UNLOCKED"}]}"#,
            )
            .create();
        let client = SubscriptionClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let resp = client
            .subscriptions_by_category(&RequestContext::new(), Category::HwHealth, 0, 20)
            .unwrap();
        assert_eq!(resp.subscriptions[0].name, "ops-email");
        mock.assert();
    }
}
