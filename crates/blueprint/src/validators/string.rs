//! String validators.

use regex::Regex;

use crate::foundation::{ConfigResult, ParseError, ParseResult, Tag, Validator};

crate::validator! {
    /// Rejects strings shorter than a minimum number of characters.
    pub MinLength { min: usize } for String;
    rule(self, value) { value.chars().count() >= self.min }
    message(self, value) {
        format!(
            "must be at least {} characters, got {}",
            self.min,
            value.chars().count()
        )
    }
    fn min_length(min: usize);
}

crate::validator! {
    /// Rejects strings longer than a maximum number of characters.
    pub MaxLength { max: usize } for String;
    rule(self, value) { value.chars().count() <= self.max }
    message(self, value) {
        format!(
            "must be at most {} characters, got {}",
            self.max,
            value.chars().count()
        )
    }
    fn max_length(max: usize);
}

crate::validator! {
    /// Rejects empty and whitespace-only strings.
    pub NotBlank for String;
    rule(self, value) { !value.trim().is_empty() }
    message(self, value) { "must not be blank".to_string() }
    fn not_blank();
}

// ============================================================================
// PATTERN
// ============================================================================

/// Rejects strings that do not match a regular expression.
///
/// The pattern is compiled at construction; an uncompilable pattern is a
/// configuration error, never a parse-time failure.
#[derive(Debug, Clone)]
pub struct Matches {
    tag: Tag,
    pattern: Regex,
}

impl Matches {
    /// Compile `pattern` into a validator.
    pub fn new(pattern: &str) -> ConfigResult<Self> {
        Ok(Self {
            tag: Tag::default(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The compiled pattern.
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Validator for Matches {
    type Data = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn validate(&self, value: &String) -> ParseResult<()> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(ParseError::validation_failed(
                &self.tag,
                format!("{value:?} does not match pattern {}", self.pattern.as_str()),
            ))
        }
    }
}

/// Creates a pattern validator from a regular expression.
pub fn matches(pattern: &str) -> ConfigResult<Matches> {
    Matches::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_counts_characters() {
        let validator = min_length(3);
        assert!(validator.validate(&"übel".to_string()).is_ok());
        assert!(validator.validate(&"üb".to_string()).is_err());
    }

    #[test]
    fn max_length_rejects_long_strings() {
        let validator = max_length(3);
        assert!(validator.validate(&"abc".to_string()).is_ok());
        assert!(validator.validate(&"abcd".to_string()).is_err());
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        let validator = not_blank();
        assert!(validator.validate(&"x".to_string()).is_ok());
        assert!(validator.validate(&"   ".to_string()).is_err());
        assert!(validator.validate(&String::new()).is_err());
    }

    #[test]
    fn matches_validates_and_rejects() {
        let validator = matches(r"^\d{4}$").unwrap();
        assert!(validator.validate(&"2024".to_string()).is_ok());
        let err = validator.validate(&"24".to_string()).unwrap_err();
        assert!(matches!(err, ParseError::ValidationFailed { .. }));
    }

    #[test]
    fn bad_pattern_is_a_config_error() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn rejection_carries_the_tag() {
        let validator = min_length(5).with_tag("name");
        let err = validator.validate(&"ab".to_string()).unwrap_err();
        assert_eq!(err.tag().as_str(), "name");
    }
}
