use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::API_VERSION;
use crate::helpers::now_iso;
use crate::validation::{rules, Checker, Validate};

/// Anything carrying an `apiVersion` field.
///
/// Clients stamp outgoing requests through this trait instead of walking
/// arbitrary structures looking for version fields.
pub trait Versionable {
    fn api_version(&self) -> &str;

    fn set_api_version(&mut self, version: &str);

    /// Fill in the current contract version if none was set.
    fn with_default_api_version(mut self) -> Self
    where
        Self: Sized,
    {
        if self.api_version().is_empty() {
            self.set_api_version(API_VERSION);
        }
        self
    }
}

/// Implement [`Versionable`] by delegating to an embedded base field.
macro_rules! impl_versionable {
    ($($ty:ty => $base:ident),+ $(,)?) => {
        $(
            impl $crate::dtos::Versionable for $ty {
                fn api_version(&self) -> &str {
                    $crate::dtos::Versionable::api_version(&self.$base)
                }

                fn set_api_version(&mut self, version: &str) {
                    $crate::dtos::Versionable::set_api_version(&mut self.$base, version)
                }
            }
        )+
    };
}
pub(crate) use impl_versionable;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequest {
    #[serde(default)]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
}

impl BaseRequest {
    pub fn new() -> Self {
        BaseRequest {
            api_version: API_VERSION.to_string(),
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for BaseRequest {
    fn default() -> Self {
        BaseRequest::new()
    }
}

impl Versionable for BaseRequest {
    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn set_api_version(&mut self, version: &str) {
        self.api_version = version.to_string();
    }
}

impl Validate for BaseRequest {
    fn validate(&self, check: &mut Checker<'_>) {
        check.rules("apiVersion", &self.api_version, &[rules::NONE_EMPTY_STRING]);
        check.uuid("requestId", &self.request_id);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse {
    #[serde(default)]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
}

impl BaseResponse {
    pub fn new(request_id: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        BaseResponse {
            api_version: API_VERSION.to_string(),
            request_id: request_id.into(),
            message: message.into(),
            status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=207).contains(&self.status_code)
    }
}

impl Versionable for BaseResponse {
    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn set_api_version(&mut self, version: &str) {
        self.api_version = version.to_string();
    }
}

/// Per-item answer to an add request; `id` is the identifier assigned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseWithIdResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl BaseWithIdResponse {
    pub fn new(
        request_id: impl Into<String>,
        message: impl Into<String>,
        status_code: u16,
        id: impl Into<String>,
    ) -> Self {
        BaseWithIdResponse {
            base: BaseResponse::new(request_id, message, status_code),
            id: id.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub count: u32,
}

impl CountResponse {
    pub fn new(request_id: impl Into<String>, message: impl Into<String>, status_code: u16, count: u32) -> Self {
        CountResponse {
            base: BaseResponse::new(request_id, message, status_code),
            count,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub timestamp: String,
}

impl PingResponse {
    pub fn new() -> Self {
        PingResponse {
            base: BaseResponse::new("", "", 200),
            timestamp: now_iso(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub version: String,
}

impl VersionResponse {
    pub fn new(version: impl Into<String>) -> Self {
        VersionResponse {
            base: BaseResponse::new("", "", 200),
            version: version.into(),
        }
    }
}

/// A service's configuration; the shape of `config` is up to the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse<T = serde_json::Value> {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub config: T,
}

impl<T> ConfigResponse<T> {
    pub fn new(config: T) -> Self {
        ConfigResponse {
            base: BaseResponse::new("", "", 200),
            config,
        }
    }
}

impl_versionable!(
    BaseWithIdResponse => base,
    CountResponse => base,
    PingResponse => base,
    VersionResponse => base,
);

impl<T> Versionable for ConfigResponse<T> {
    fn api_version(&self) -> &str {
        self.base.api_version()
    }

    fn set_api_version(&mut self, version: &str) {
        self.base.set_api_version(version)
    }
}
