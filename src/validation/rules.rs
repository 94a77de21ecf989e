//! Named field rules and the registry that holds them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::helpers::{parse_duration, parse_interval_datetime};
use crate::models::normalize_value_type;

pub const NONE_EMPTY_STRING: &str = "none-empty-string";
pub const UNRESERVED_CHARS: &str = "rfc3986-unreserved-chars";
pub const UUID: &str = "uuid";
pub const INTERVAL_DATETIME: &str = "interval-datetime";
pub const FREQUENCY: &str = "frequency";
pub const VALUE_TYPE: &str = "value-type";
pub const EMAIL: &str = "email";
pub const URI: &str = "uri";

// RFC 3986 unreserved characters, plus the sub-delimiters used in resource names
static UNRESERVED_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_.~:;=]+$").expect("valid unreserved chars regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub type RuleFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct Rule {
    check: RuleFn,
    reason: &'static str,
}

impl Rule {
    pub fn new(reason: &'static str, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Rule {
            check: Arc::new(check),
            reason,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Human readable description of what a rejected value failed to be.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("reason", &self.reason).finish()
    }
}

/// Set of rules a [`Validator`](super::Validator) may apply, keyed by name.
///
/// The registry is built explicitly and owned by the validator; nothing is
/// registered behind the caller's back.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    pub fn empty() -> Self {
        RuleRegistry::default()
    }

    /// Registry holding every rule the contracts in this crate refer to.
    pub fn standard() -> Self {
        let mut registry = RuleRegistry::empty();
        registry
            .register(NONE_EMPTY_STRING, Rule::new("must not be empty", none_empty_string))
            .register(
                UNRESERVED_CHARS,
                Rule::new(
                    "must be non-empty and only contain characters A-Z a-z 0-9 - _ . ~ : ; =",
                    unreserved_chars,
                ),
            )
            .register(UUID, Rule::new("must be a UUID or empty", uuid_or_empty))
            .register(
                INTERVAL_DATETIME,
                Rule::new("must be a datetime formatted as YYYYMMDDThhmmss", interval_datetime),
            )
            .register(
                FREQUENCY,
                Rule::new("must be a positive duration such as 500ms or 1h30m", frequency),
            )
            .register(VALUE_TYPE, Rule::new("must be a supported value type", value_type))
            .register(EMAIL, Rule::new("must be an email address", email))
            .register(URI, Rule::new("must be an absolute URI", uri));
        registry
    }

    /// Add or replace a rule.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        let name = name.into();
        if self.rules.insert(name.clone(), rule).is_some() {
            log::debug!("Replaced validation rule '{}'", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }
}

pub fn none_empty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn unreserved_chars(value: &str) -> bool {
    none_empty_string(value) && UNRESERVED_CHARS_RE.is_match(value)
}

const HYPHENATED_UUID_LEN: usize = 36;

/// Empty means "not assigned yet" and is always acceptable. Otherwise only
/// the hyphenated form is allowed.
pub fn uuid_or_empty(value: &str) -> bool {
    value.is_empty() || (value.len() == HYPHENATED_UUID_LEN && Uuid::parse_str(value).is_ok())
}

pub fn interval_datetime(value: &str) -> bool {
    parse_interval_datetime(value).is_ok()
}

pub fn frequency(value: &str) -> bool {
    parse_duration(value).is_ok_and(|d| !d.is_zero())
}

pub fn value_type(value: &str) -> bool {
    normalize_value_type(value).is_ok()
}

pub fn email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn uri(value: &str) -> bool {
    Url::parse(value).is_ok_and(|u| u.has_host())
}
