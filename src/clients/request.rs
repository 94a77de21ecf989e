//! Shared plumbing behind every resource client: URL building, one blocking
//! round trip per call, and mapping of the outcome onto [`ErrKind`]s.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, RequestBuilder};
use url::Url;

use super::RequestContext;
use crate::constants::{params, routes, CONTENT_TYPE, CONTENT_TYPE_JSON, CORRELATION_HEADER};
use crate::dtos::BaseResponse;
use crate::errors::{ErrKind, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        })
    }
}

/// Query string parameters, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    pub fn paging(offset: u32, limit: i32) -> Self {
        Query::new()
            .param(params::OFFSET, offset.to_string())
            .param(params::LIMIT, limit.to_string())
    }

    pub fn param(mut self, name: &'static str, value: String) -> Self {
        self.0.push((name, value));
        self
    }

    /// Comma-joined label filter; omitted when there are no labels.
    pub fn labels(self, labels: &[String]) -> Self {
        if labels.is_empty() {
            self
        } else {
            self.param(params::LABELS, labels.join(params::COMMA))
        }
    }
}

/// Blocking HTTP caller bound to one service's base URL.
#[derive(Clone, Debug)]
pub struct Requester {
    agent: Agent,
    base_url: Url,
    timeout: Duration,
}

impl Requester {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::wrap(ErrKind::ClientError, format!("invalid base URL '{base_url}'"), e)
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::new(
                ErrKind::ClientError,
                format!("'{base_url}' cannot be used as a base URL"),
            ));
        }
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
            .build();
        Ok(Requester {
            agent: Agent::new_with_config(config),
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/v2/<segments...>`, each segment escaped on its own.
    pub(crate) fn url(&self, segments: &[&str], query: &Query) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::new(ErrKind::ClientError, format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(routes::API_BASE)
            .extend(segments);
        if !query.0.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.0.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        segments: &[&str],
        query: Query,
    ) -> Result<T> {
        let url = self.url(segments, &query)?;
        let body = self.execute(ctx, Verb::Get, &url, None)?;
        decode_response(&body)
    }

    pub(crate) fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        segments: &[&str],
        payload: &B,
    ) -> Result<T> {
        self.with_payload(ctx, Verb::Post, segments, payload)
    }

    pub(crate) fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        segments: &[&str],
        payload: &B,
    ) -> Result<T> {
        self.with_payload(ctx, Verb::Put, segments, payload)
    }

    pub(crate) fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        segments: &[&str],
        payload: &B,
    ) -> Result<T> {
        self.with_payload(ctx, Verb::Patch, segments, payload)
    }

    pub(crate) fn delete<T: DeserializeOwned>(&self, ctx: &RequestContext, segments: &[&str]) -> Result<T> {
        let url = self.url(segments, &Query::new())?;
        let body = self.execute(ctx, Verb::Delete, &url, None)?;
        decode_response(&body)
    }

    fn with_payload<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        verb: Verb,
        segments: &[&str],
        payload: &B,
    ) -> Result<T> {
        let url = self.url(segments, &Query::new())?;
        let payload = serde_json::to_vec(payload).map_err(|e| {
            Error::wrap(ErrKind::ContractInvalid, "failed to encode request body", e)
        })?;
        log::trace!("{} {} payload: {}", verb, url, String::from_utf8_lossy(&payload));
        let body = self.execute(ctx, verb, &url, Some(&payload))?;
        decode_response(&body)
    }

    fn execute(
        &self,
        ctx: &RequestContext,
        verb: Verb,
        url: &Url,
        payload: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let timeout = ctx.time_left(self.timeout)?;
        let correlation_id = ctx.correlation_id_or_new();
        log::debug!("{} {} (correlation id {})", verb, url, correlation_id);

        let uri = url.as_str();
        let payload = payload.unwrap_or_default();
        let sent = match verb {
            Verb::Get => call(self.agent.get(uri), &correlation_id, timeout),
            Verb::Delete => call(self.agent.delete(uri), &correlation_id, timeout),
            Verb::Post => send(self.agent.post(uri), &correlation_id, timeout, payload),
            Verb::Put => send(self.agent.put(uri), &correlation_id, timeout, payload),
            Verb::Patch => send(self.agent.patch(uri), &correlation_id, timeout, payload),
        };
        let mut response = sent.map_err(|e| {
            Error::wrap(ErrKind::ClientError, format!("failed to send {verb} {url}"), e)
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::wrap(ErrKind::IOError, "failed to read response body", e))?;
        log::debug!("{} {} returned status {}", verb, url, status);

        if (200..=207).contains(&status) {
            Ok(body)
        } else {
            Err(status_error(status, &body))
        }
    }
}

fn call(
    request: RequestBuilder<WithoutBody>,
    correlation_id: &str,
    timeout: Duration,
) -> std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    request
        .header(CORRELATION_HEADER, correlation_id)
        .config()
        .timeout_global(Some(timeout))
        .build()
        .call()
}

fn send(
    request: RequestBuilder<WithBody>,
    correlation_id: &str,
    timeout: Duration,
    payload: &[u8],
) -> std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    request
        .header(CORRELATION_HEADER, correlation_id)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .config()
        .timeout_global(Some(timeout))
        .build()
        .send(payload)
}

fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    log::trace!("Response body: {}", String::from_utf8_lossy(body));
    serde_json::from_slice(body)
        .map_err(|e| Error::wrap(ErrKind::ContractInvalid, "failed to decode response body", e))
}

fn status_error(status: u16, body: &[u8]) -> Error {
    let detail = match serde_json::from_slice::<BaseResponse>(body) {
        Ok(resp) if !resp.message.is_empty() => resp.message,
        _ => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if !text.is_empty() {
                log::warn!("Error response with status {} is not a BaseResponse", status);
            }
            text
        }
    };
    let message = if detail.is_empty() {
        format!("request failed with status code {status}")
    } else {
        format!("request failed with status code {status}: {detail}")
    };
    Error::new(ErrKind::from_http_status(status), message)
}
