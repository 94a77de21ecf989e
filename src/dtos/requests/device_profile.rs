use super::request;
use crate::dtos::DeviceProfileDto;
use crate::models::DeviceProfile;

request!(
    /// Used for both adding and replacing a profile.
    DeviceProfileRequest { profile: DeviceProfileDto }
);

pub fn device_profile_requests_to_models(requests: Vec<DeviceProfileRequest>) -> Vec<DeviceProfile> {
    requests.into_iter().map(|r| DeviceProfile::from(r.profile)).collect()
}
