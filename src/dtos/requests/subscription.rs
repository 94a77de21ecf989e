use super::request;
use crate::dtos::{SubscriptionDto, UpdateSubscriptionDto};
use crate::models::Subscription;

request!(AddSubscriptionRequest { subscription: SubscriptionDto });
request!(UpdateSubscriptionRequest { subscription: UpdateSubscriptionDto });

pub fn add_subscription_requests_to_models(
    requests: Vec<AddSubscriptionRequest>,
) -> Vec<Subscription> {
    requests.into_iter().map(|r| Subscription::from(r.subscription)).collect()
}
