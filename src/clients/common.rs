use std::time::Duration;

use super::request::Query;
use super::{RequestContext, Requester};
use crate::config::{ClientConfig, Service};
use crate::constants::routes;
use crate::dtos::{ConfigResponse, PingResponse, VersionResponse};
use crate::errors::Result;

/// Endpoints every service exposes.
#[derive(Clone, Debug)]
pub struct CommonClient {
    requester: Requester,
}

impl CommonClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(CommonClient {
            requester: Requester::new(base_url, timeout)?,
        })
    }

    pub fn for_service(config: &ClientConfig, service: Service) -> Result<Self> {
        Self::new(config.url_for(service), config.request_timeout)
    }

    pub fn ping(&self, ctx: &RequestContext) -> Result<PingResponse> {
        self.requester.get(ctx, &[routes::PING], Query::new())
    }

    pub fn version(&self, ctx: &RequestContext) -> Result<VersionResponse> {
        self.requester.get(ctx, &[routes::VERSION], Query::new())
    }

    pub fn configuration(&self, ctx: &RequestContext) -> Result<ConfigResponse> {
        self.requester.get(ctx, &[routes::CONFIG], Query::new())
    }
}
