//! Membership validators: closed allowlists and blocklists.

use std::fmt::Display;

use crate::foundation::{ConfigError, ConfigResult, ParseError, ParseResult, Tag, Validator};

fn render<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejects values outside a closed set.
///
/// An empty allowlist would reject everything, so it is a configuration
/// error.
#[derive(Debug, Clone)]
pub struct Allowlist<T> {
    tag: Tag,
    allowed: Vec<T>,
}

impl<T: PartialEq + Display> Allowlist<T> {
    pub fn new(allowed: Vec<T>) -> ConfigResult<Self> {
        if allowed.is_empty() {
            return Err(ConfigError::EmptyAllowlist);
        }
        Ok(Self {
            tag: Tag::default(),
            allowed,
        })
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The allowed values.
    pub fn allowed(&self) -> &[T] {
        &self.allowed
    }
}

impl<T: PartialEq + Display> Validator for Allowlist<T> {
    type Data = T;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn validate(&self, value: &T) -> ParseResult<()> {
        if self.allowed.contains(value) {
            Ok(())
        } else {
            Err(ParseError::validation_failed(
                &self.tag,
                format!("{value} is not one of: {}", render(&self.allowed)),
            ))
        }
    }
}

/// Creates an allowlist validator.
pub fn allowlist<T: PartialEq + Display>(allowed: Vec<T>) -> ConfigResult<Allowlist<T>> {
    Allowlist::new(allowed)
}

/// Rejects values inside a closed set. An empty blocklist blocks
/// nothing and is permitted.
#[derive(Debug, Clone)]
pub struct Blocklist<T> {
    tag: Tag,
    blocked: Vec<T>,
}

impl<T: PartialEq + Display> Blocklist<T> {
    #[must_use]
    pub fn new(blocked: Vec<T>) -> Self {
        Self {
            tag: Tag::default(),
            blocked,
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The blocked values.
    pub fn blocked(&self) -> &[T] {
        &self.blocked
    }
}

impl<T: PartialEq + Display> Validator for Blocklist<T> {
    type Data = T;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn validate(&self, value: &T) -> ParseResult<()> {
        if self.blocked.contains(value) {
            Err(ParseError::validation_failed(
                &self.tag,
                format!("{value} is a blocked value"),
            ))
        } else {
            Ok(())
        }
    }
}

/// Creates a blocklist validator.
#[must_use]
pub fn blocklist<T: PartialEq + Display>(blocked: Vec<T>) -> Blocklist<T> {
    Blocklist::new(blocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist_accepts_members_only() {
        let validator = allowlist(vec!["dev".to_string(), "prod".to_string()]).unwrap();
        assert!(validator.validate(&"dev".to_string()).is_ok());
        assert!(validator.validate(&"staging".to_string()).is_err());
    }

    #[test]
    fn empty_allowlist_is_a_config_error() {
        assert!(matches!(
            allowlist(Vec::<i64>::new()),
            Err(ConfigError::EmptyAllowlist)
        ));
    }

    #[test]
    fn blocklist_rejects_members() {
        let validator = blocklist(vec![0_i64]);
        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&0).is_err());
    }
}
