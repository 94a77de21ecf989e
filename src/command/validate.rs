use std::fs;

use anyhow::{anyhow, Context, Result};
use core_contracts::dtos::requests::{
    decode, decode_batch, AddDeviceRequest, AddDeviceServiceRequest, AddEventRequest,
    AddIntervalActionRequest, AddIntervalRequest, AddNotificationRequest, AddSubscriptionRequest,
    DeviceProfileRequest, UpdateDeviceRequest, UpdateDeviceServiceRequest,
    UpdateIntervalActionRequest, UpdateIntervalRequest, UpdateSubscriptionRequest,
};
use core_contracts::validation::{Validate, Validator};
use serde::de::DeserializeOwned;

use crate::argsets::ValidateArgs;

const KINDS: [&str; 13] = [
    "device",
    "device-update",
    "device-profile",
    "device-service",
    "device-service-update",
    "event",
    "subscription",
    "subscription-update",
    "notification",
    "interval",
    "interval-update",
    "interval-action",
    "interval-action-update",
];

/// Number of requests in `body`, which holds one request object or an array of them.
fn count_valid<T: DeserializeOwned + Validate>(body: &[u8], validator: &Validator) -> Result<usize> {
    let is_batch = body.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[');
    let count = if is_batch {
        decode_batch::<T>(body, validator)
            .map_err(|e| anyhow!(e.message_chain()))?
            .len()
    } else {
        decode::<T>(body, validator).map_err(|e| anyhow!(e.message_chain()))?;
        1
    };
    Ok(count)
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let body = fs::read(&args.file)
        .with_context(|| format!("Unable to read {}", args.file.display()))?;
    let validator = Validator::default();

    let count = match args.kind.as_str() {
        "device" => count_valid::<AddDeviceRequest>(&body, &validator),
        "device-update" => count_valid::<UpdateDeviceRequest>(&body, &validator),
        "device-profile" => count_valid::<DeviceProfileRequest>(&body, &validator),
        "device-service" => count_valid::<AddDeviceServiceRequest>(&body, &validator),
        "device-service-update" => count_valid::<UpdateDeviceServiceRequest>(&body, &validator),
        "event" => count_valid::<AddEventRequest>(&body, &validator),
        "subscription" => count_valid::<AddSubscriptionRequest>(&body, &validator),
        "subscription-update" => count_valid::<UpdateSubscriptionRequest>(&body, &validator),
        "notification" => count_valid::<AddNotificationRequest>(&body, &validator),
        "interval" => count_valid::<AddIntervalRequest>(&body, &validator),
        "interval-update" => count_valid::<UpdateIntervalRequest>(&body, &validator),
        "interval-action" => count_valid::<AddIntervalActionRequest>(&body, &validator),
        "interval-action-update" => count_valid::<UpdateIntervalActionRequest>(&body, &validator),
        other => Err(anyhow!(
            "Unknown request kind '{}', expected one of: {}",
            other,
            KINDS.join(", ")
        )),
    }?;

    log::info!("{} request(s) of kind {} passed validation", count, args.kind);
    println!("valid: {} request(s)", count);
    Ok(())
}
