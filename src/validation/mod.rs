//! Declarative validation of DTOs.
//!
//! Each DTO implements [`Validate`] by declaring its field rules against a
//! [`Checker`]. A [`Validator`] owns the [`RuleRegistry`] the rules are looked
//! up in, walks the DTO and turns the collected [`Violation`]s into a single
//! `ContractInvalid` error.

use std::collections::HashSet;

use crate::errors::{Error, Violation};

pub mod rules;
mod value;

pub use rules::{Rule, RuleRegistry};
pub use value::check_simple_value;

pub trait Validate {
    fn validate(&self, check: &mut Checker<'_>);
}

impl<T: Validate> Validate for [T] {
    fn validate(&self, check: &mut Checker<'_>) {
        for (index, item) in self.iter().enumerate() {
            check.nested(&format!("[{index}]"), item);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, check: &mut Checker<'_>) {
        self.as_slice().validate(check)
    }
}

#[derive(Clone, Debug)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    pub fn new(registry: RuleRegistry) -> Self {
        Validator { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn validate<T: Validate + ?Sized>(&self, value: &T) -> Result<(), Error> {
        let mut check = Checker::new(&self.registry);
        value.validate(&mut check);
        check.finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new(RuleRegistry::standard())
    }
}

/// Collects violations while a DTO declares its rules.
///
/// Field names are the wire (camelCase) names; nesting is tracked so that a
/// violation deep inside a request reads like `device.autoEvents[0].frequency`.
pub struct Checker<'a> {
    registry: &'a RuleRegistry,
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl<'a> Checker<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Checker {
            registry,
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    fn path_of(&self, field: &str) -> String {
        let mut full = String::new();
        for segment in self.path.iter().map(String::as_str).chain([field]) {
            if segment.is_empty() {
                continue;
            }
            if !full.is_empty() && !segment.starts_with('[') {
                full.push('.');
            }
            full.push_str(segment);
        }
        full
    }

    pub fn violation(&mut self, field: &str, reason: impl Into<String>) {
        let violation = Violation::new(self.path_of(field), reason);
        log::trace!("Validation failed: {}", violation);
        self.violations.push(violation);
    }

    /// Record `reason` against `field` unless `ok` holds.
    pub fn ensure(&mut self, field: &str, ok: bool, reason: impl Into<String>) {
        if !ok {
            self.violation(field, reason);
        }
    }

    /// Apply the named registry rules in order, stopping at the first failure.
    pub fn rules(&mut self, field: &str, value: &str, rule_names: &[&str]) {
        for name in rule_names {
            let outcome = self.registry.get(name).map(|rule| (rule.accepts(value), rule.reason()));
            match outcome {
                Some((true, _)) => continue,
                Some((false, reason)) => self.violation(field, reason),
                None => self.violation(field, format!("unknown validation rule '{name}'")),
            }
            return;
        }
    }

    /// Like [`Checker::rules`], skipped entirely when the value is absent.
    pub fn optional_rules(&mut self, field: &str, value: Option<&str>, rule_names: &[&str]) {
        if let Some(value) = value {
            self.rules(field, value, rule_names);
        }
    }

    pub fn required(&mut self, field: &str, value: &str) {
        self.rules(field, value, &[rules::NONE_EMPTY_STRING]);
    }

    /// Required, restricted-charset identifier such as a device or profile name.
    pub fn name(&mut self, field: &str, value: &str) {
        self.rules(field, value, &[rules::UNRESERVED_CHARS]);
    }

    pub fn uuid(&mut self, field: &str, value: &str) {
        self.rules(field, value, &[rules::UUID]);
    }

    /// `field` must be present unless `sibling` is. Returns whether `field`
    /// is present so callers can go on to check its content.
    pub fn required_without(
        &mut self,
        field: &str,
        present: bool,
        sibling: &str,
        sibling_present: bool,
    ) -> bool {
        if !present && !sibling_present {
            self.violation(field, format!("is required when {sibling} is absent"));
        }
        present
    }

    pub fn not_empty<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.violation(field, "must contain at least one entry");
        }
    }

    /// Every name must occur once; each duplicate is reported once.
    pub fn unique<'v>(&mut self, field: &str, names: impl IntoIterator<Item = &'v str>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for name in names {
            if !seen.insert(name) && reported.insert(name) {
                self.violation(field, format!("duplicate name '{name}'"));
            }
        }
    }

    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, value: &T) {
        self.path.push(field.to_string());
        value.validate(self);
        self.path.pop();
    }

    pub fn each<T: Validate>(&mut self, field: &str, items: &[T]) {
        self.nested(field, items);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn finish(self) -> Result<(), Error> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Error::contract_invalid(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrKind;

    struct Leaf {
        name: String,
    }

    impl Validate for Leaf {
        fn validate(&self, check: &mut Checker<'_>) {
            check.name("name", &self.name);
        }
    }

    struct Root {
        id: String,
        leaves: Vec<Leaf>,
    }

    impl Validate for Root {
        fn validate(&self, check: &mut Checker<'_>) {
            check.uuid("id", &self.id);
            check.not_empty("leaves", &self.leaves);
            check.each("leaves", &self.leaves);
            check.unique("leaves", self.leaves.iter().map(|l| l.name.as_str()));
        }
    }

    fn leaf(name: &str) -> Leaf {
        Leaf {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_nested_paths_are_reported() {
        let root = Root {
            id: String::new(),
            leaves: vec![leaf("ok"), leaf(" ")],
        };
        let err = Validator::default().validate(&root).unwrap_err();
        assert_eq!(err.kind(), ErrKind::ContractInvalid);
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "leaves[1].name");
    }

    #[test]
    fn test_duplicates_reported_once() {
        let root = Root {
            id: "not-a-uuid".to_string(),
            leaves: vec![leaf("a"), leaf("a"), leaf("a")],
        };
        let err = Validator::default().validate(&root).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "leaves"]);
    }

    #[test]
    fn test_unknown_rule_is_a_violation() {
        struct UsesMissingRule;
        impl Validate for UsesMissingRule {
            fn validate(&self, check: &mut Checker<'_>) {
                check.rules("field", "value", &[rules::UUID]);
            }
        }
        let validator = Validator::new(RuleRegistry::empty());
        let err = validator.validate(&UsesMissingRule).unwrap_err();
        assert!(err.to_string().contains("unknown validation rule 'uuid'"));
    }

    #[test]
    fn test_required_without() {
        let registry = RuleRegistry::standard();
        let mut check = Checker::new(&registry);
        assert!(!check.required_without("id", false, "name", true));
        assert!(check.is_clean());
        check.required_without("id", false, "name", false);
        assert!(!check.is_clean());
    }

    #[test]
    fn test_batch_paths_use_index() {
        let batch = vec![leaf("fine"), leaf("has space")];
        let err = Validator::default().validate(&batch).unwrap_err();
        assert_eq!(err.violations()[0].field, "[1].name");
    }
}
