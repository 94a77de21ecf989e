//! Blocking REST clients, one per resource.
//!
//! Every call takes a [`RequestContext`], performs a single round trip and
//! returns the decoded response envelope. There are no retries; callers that
//! want them wrap the call.

mod common;
mod context;
mod device;
mod device_profile;
mod device_service;
mod event;
mod interval;
mod interval_action;
mod notification;
mod reading;
mod request;
mod subscription;
mod transmission;

pub use common::CommonClient;
pub use context::RequestContext;
pub use device::DeviceClient;
pub use device_profile::DeviceProfileClient;
pub use device_service::DeviceServiceClient;
pub use event::EventClient;
pub use interval::IntervalClient;
pub use interval_action::IntervalActionClient;
pub use notification::NotificationClient;
pub use reading::ReadingClient;
pub use request::Requester;
pub use subscription::SubscriptionClient;
pub use transmission::TransmissionClient;

use crate::dtos::Versionable;

/// Declare a client bound to the service whose URL is `$url` in
/// [`ClientConfig`](crate::config::ClientConfig).
macro_rules! client {
    ($(#[$meta:meta])* $name:ident => $url:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            requester: $crate::clients::Requester,
        }

        impl $name {
            pub fn new(base_url: &str, timeout: std::time::Duration) -> $crate::errors::Result<Self> {
                Ok($name {
                    requester: $crate::clients::Requester::new(base_url, timeout)?,
                })
            }

            pub fn from_config(config: &$crate::config::ClientConfig) -> $crate::errors::Result<Self> {
                Self::new(&config.$url, config.request_timeout)
            }
        }
    };
}
pub(crate) use client;

fn versioned<R: Versionable>(requests: Vec<R>) -> Vec<R> {
    requests
        .into_iter()
        .map(Versionable::with_default_api_version)
        .collect()
}
