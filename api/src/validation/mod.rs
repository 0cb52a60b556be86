//! Request validation
//!
//! A `Validator<T>` is an ordered list of property rules. Running it collects
//! every failing rule into a `ValidationErrors` field-error map, keyed by the
//! request property name, so clients can fix all problems in one round-trip.

pub mod employee;

use std::collections::BTreeMap;
use std::fmt;

pub use employee::{create_employee_validator, update_employee_validator};

/// Field-error map: property name to the messages raised against it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, property: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(property.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, property: &str) -> bool {
        self.errors.contains_key(property)
    }

    /// Messages for a property, in the order the rules ran
    pub fn messages(&self, property: &str) -> &[String] {
        self.errors
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.errors.clone()
    }

    /// `Ok(())` when no rule failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", property, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

type Check<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;

struct Rule<T> {
    property: &'static str,
    check: Check<T>,
}

/// Ordered set of property rules for a request type
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: 'static> Validator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a string property to be present and not blank.
    ///
    /// Fails with `'<display_name>' must not be empty.`
    pub fn not_empty<F>(
        mut self,
        property: &'static str,
        display_name: &'static str,
        value: F,
    ) -> Self
    where
        F: Fn(&T) -> Option<&str> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            property,
            check: Box::new(move |input| match value(input) {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(format!("'{}' must not be empty.", display_name)),
            }),
        });
        self
    }

    /// Run every rule and collect the failures
    pub fn validate(&self, input: &T) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            if let Some(message) = (rule.check)(input) {
                errors.add(rule.property, message);
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        name: Option<String>,
        nickname: Option<String>,
    }

    fn validator() -> Validator<Named> {
        Validator::new()
            .not_empty("Name", "Name", |n: &Named| n.name.as_deref())
            .not_empty("Nickname", "Nick Name", |n: &Named| n.nickname.as_deref())
    }

    #[test]
    fn passes_when_all_present() {
        let input = Named {
            name: Some("Toki".into()),
            nickname: Some("theDog".into()),
        };
        assert!(validator().validate(&input).is_ok());
    }

    #[test]
    fn missing_blank_and_whitespace_all_fail() {
        for value in [None, Some(String::new()), Some("   ".to_string())] {
            let input = Named {
                name: value,
                nickname: Some("ok".into()),
            };
            let errors = validator().validate(&input).unwrap_err();
            assert_eq!(errors.messages("Name"), ["'Name' must not be empty."]);
            assert!(!errors.contains("Nickname"));
        }
    }

    #[test]
    fn collects_every_failure() {
        let input = Named {
            name: None,
            nickname: None,
        };
        let errors = validator().validate(&input).unwrap_err();
        assert!(errors.contains("Name"));
        assert_eq!(errors.messages("Nickname"), ["'Nick Name' must not be empty."]);
    }

    #[test]
    fn messages_accumulate_per_property() {
        let mut errors = ValidationErrors::default();
        errors.add("Email", "first");
        errors.add("Email", "second");
        assert_eq!(errors.messages("Email"), ["first", "second"]);
        assert!(errors.messages("Missing").is_empty());
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::default();
        errors.add("B", "b failed");
        errors.add("A", "a failed");
        assert_eq!(errors.to_string(), "A: a failed; B: b failed");
    }
}
