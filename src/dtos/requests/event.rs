use super::request;
use crate::dtos::EventDto;
use crate::models::Event;

request!(AddEventRequest { event: EventDto });

pub fn add_event_request_to_model(request: AddEventRequest) -> Event {
    Event::from(request.event)
}
