use super::request;
use crate::dtos::{IntervalActionDto, UpdateIntervalActionDto};
use crate::models::IntervalAction;

request!(AddIntervalActionRequest { action: IntervalActionDto });
request!(UpdateIntervalActionRequest { action: UpdateIntervalActionDto });

pub fn add_interval_action_requests_to_models(
    requests: Vec<AddIntervalActionRequest>,
) -> Vec<IntervalAction> {
    requests.into_iter().map(|r| IntervalAction::from(r.action)).collect()
}
