use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::errors::{ErrKind, Error, Result};

/// Per-call context: the correlation id to propagate and an optional deadline.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    correlation_id: Option<String>,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        RequestContext::default()
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now. A timeout too large to represent leaves
    /// the context without a deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn correlation_id_or_new(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Time the next request may take, capped at `limit`.
    pub(crate) fn time_left(&self, limit: Duration) -> Result<Duration> {
        let Some(deadline) = self.deadline else {
            return Ok(limit);
        };
        match deadline.checked_duration_since(Instant::now()) {
            Some(left) if !left.is_zero() => Ok(left.min(limit)),
            _ => Err(Error::new(
                ErrKind::ClientError,
                "deadline exceeded before the request was sent",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_left() {
        let limit = Duration::from_secs(60);
        assert_eq!(RequestContext::new().time_left(limit).unwrap(), limit);

        let soon = RequestContext::new().with_timeout(Duration::from_secs(5));
        assert!(soon.time_left(limit).unwrap() <= Duration::from_secs(5));

        let expired = RequestContext::new().with_deadline(Instant::now() - Duration::from_millis(1));
        assert_eq!(expired.time_left(limit).unwrap_err().kind(), ErrKind::ClientError);
    }

    #[test]
    fn test_huge_timeout_means_no_deadline() {
        let ctx = RequestContext::new().with_timeout(Duration::MAX);
        assert!(ctx.deadline().is_none());
        let limit = Duration::from_secs(30);
        assert_eq!(ctx.time_left(limit).unwrap(), limit);
    }

    #[test]
    fn test_correlation_id() {
        let ctx = RequestContext::new().with_correlation_id("abc");
        assert_eq!(ctx.correlation_id_or_new(), "abc");
        let generated = RequestContext::new().correlation_id_or_new();
        assert!(Uuid::parse_str(&generated).is_ok());
    }
}
