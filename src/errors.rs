//! Kinded errors shared by every layer of the crate.
//!
//! Errors are classified by [`ErrKind`] rather than by type. Each layer wraps
//! the error it received with its own message and keeps the inner kind, so
//! the caller sees the original category together with the whole message
//! chain.

use std::error::Error as StdError;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

const CHAIN_SEPARATOR: &str = " -> ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrKind {
    #[default]
    Unknown,
    /// Validation or parsing failure; never worth retrying.
    ContractInvalid,
    EntityDoesNotExist,
    /// The request could not be sent or no response was received.
    ClientError,
    ServerError,
    /// Local read or write failure.
    IOError,
}

impl ErrKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrKind::Unknown => "Unknown",
            ErrKind::ContractInvalid => "ContractInvalid",
            ErrKind::EntityDoesNotExist => "EntityDoesNotExist",
            ErrKind::ClientError => "ClientError",
            ErrKind::ServerError => "ServerError",
            ErrKind::IOError => "IOError",
        }
    }

    /// Status code a service answers with when it fails with this kind.
    pub fn http_status(self) -> u16 {
        match self {
            ErrKind::ContractInvalid => 400,
            ErrKind::EntityDoesNotExist => 404,
            ErrKind::Unknown
            | ErrKind::ClientError
            | ErrKind::ServerError
            | ErrKind::IOError => 500,
        }
    }

    /// Kind assigned to a failed response. Only 400 and 404 carry meaning of
    /// their own; everything else is the remote side's fault.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrKind::ContractInvalid,
            404 => ErrKind::EntityDoesNotExist,
            _ => ErrKind::ServerError,
        }
    }
}

impl fmt::Display for ErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule, addressed by the JSON path of the offending field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Violation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.reason)
        } else {
            write!(f, "{}: {}", self.field, self.reason)
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrKind,
    message: String,
    violations: Vec<Violation>,
    #[source]
    source: Option<BoxError>,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn new(kind: ErrKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            violations: Vec::new(),
            source: None,
        }
    }

    /// Wrap a foreign error under an explicit kind.
    pub fn wrap(
        kind: ErrKind,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error {
            kind,
            message: message.into(),
            violations: Vec::new(),
            source: Some(source.into()),
        }
    }

    /// Add a layer of context, keeping the kind and violations of `self`.
    pub fn context(self, message: impl Into<String>) -> Self {
        Error {
            kind: self.kind,
            message: message.into(),
            violations: self.violations.clone(),
            source: Some(Box::new(self)),
        }
    }

    pub fn contract_invalid(violations: Vec<Violation>) -> Self {
        let message = violations.iter().join("; ");
        Error {
            kind: ErrKind::ContractInvalid,
            message,
            violations,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn http_status_code(&self) -> u16 {
        self.kind.http_status()
    }

    /// Messages of this error and all of its sources, outermost first.
    pub fn message_chain(&self) -> String {
        let mut messages = vec![self.message.clone()];
        let mut next = self.source.as_deref().map(|e| e as &(dyn StdError + 'static));
        while let Some(err) = next {
            match err.downcast_ref::<Error>() {
                Some(inner) => messages.push(inner.message.clone()),
                None => messages.push(err.to_string()),
            }
            next = err.source();
        }
        messages
            .into_iter()
            .filter(|m| !m.is_empty())
            .join(CHAIN_SEPARATOR)
    }
}

/// Kind of an arbitrary error: [`ErrKind::Unknown`] unless it is one of ours.
pub fn kind_of(err: &(dyn StdError + 'static)) -> ErrKind {
    err.downcast_ref::<Error>()
        .map(Error::kind)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_inner_kind() {
        let inner = Error::new(ErrKind::EntityDoesNotExist, "device not found");
        let outer = inner.context("failed to query device");
        assert_eq!(outer.kind(), ErrKind::EntityDoesNotExist);
        assert_eq!(outer.http_status_code(), 404);
    }

    #[test]
    fn test_message_chain_walks_foreign_sources() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected_tail = json_err.to_string();
        let err = Error::wrap(ErrKind::ContractInvalid, "failed to decode JSON", json_err)
            .context("AddDeviceRequest rejected");

        let chain = err.message_chain();
        assert!(chain.starts_with("AddDeviceRequest rejected -> failed to decode JSON -> "));
        assert!(chain.ends_with(&expected_tail));
    }

    #[test]
    fn test_contract_invalid_joins_violations() {
        let err = Error::contract_invalid(vec![
            Violation::new("device.name", "must not be empty"),
            Violation::new("device.protocols", "must contain at least one entry"),
        ]);
        assert_eq!(err.kind(), ErrKind::ContractInvalid);
        assert_eq!(
            err.to_string(),
            "device.name: must not be empty; device.protocols: must contain at least one entry"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_kind_from_http_status() {
        assert_eq!(ErrKind::from_http_status(400), ErrKind::ContractInvalid);
        assert_eq!(ErrKind::from_http_status(404), ErrKind::EntityDoesNotExist);
        assert_eq!(ErrKind::from_http_status(409), ErrKind::ServerError);
        assert_eq!(ErrKind::from_http_status(503), ErrKind::ServerError);
    }

    #[test]
    fn test_kind_of_foreign_error_is_unknown() {
        let io = std::io::Error::other("disk gone");
        assert_eq!(kind_of(&io), ErrKind::Unknown);
        let ours = Error::new(ErrKind::IOError, "disk gone");
        assert_eq!(kind_of(&ours), ErrKind::IOError);
    }
}
