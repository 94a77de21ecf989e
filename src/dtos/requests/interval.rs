use super::request;
use crate::dtos::{IntervalDto, UpdateIntervalDto};
use crate::models::Interval;

request!(AddIntervalRequest { interval: IntervalDto });
request!(UpdateIntervalRequest { interval: UpdateIntervalDto });

pub fn add_interval_requests_to_models(requests: Vec<AddIntervalRequest>) -> Vec<Interval> {
    requests.into_iter().map(|r| Interval::from(r.interval)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::requests::decode;
    use crate::validation::Validator;

    #[test]
    fn test_name_only_update_leaves_schedule_unset() {
        let body = br#"{"apiVersion":"v2","interval":{"name":"TestInterval"}}"#;
        let request: UpdateIntervalRequest = decode(body, &Validator::default()).unwrap();
        let interval = request.interval;
        assert_eq!(interval.name.as_deref(), Some("TestInterval"));
        assert_eq!(interval.start, None);
        assert_eq!(interval.end, None);
        assert_eq!(interval.frequency, None);
        assert_eq!(interval.run_once, None);
    }
}
