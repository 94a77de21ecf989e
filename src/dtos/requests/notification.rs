use super::request;
use crate::dtos::NotificationDto;
use crate::models::Notification;

request!(AddNotificationRequest { notification: NotificationDto });

pub fn add_notification_requests_to_models(
    requests: Vec<AddNotificationRequest>,
) -> Vec<Notification> {
    requests.into_iter().map(|r| Notification::from(r.notification)).collect()
}
