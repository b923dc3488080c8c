//! The failure taxonomy.
//!
//! Two disjoint trees: [`ParseError`] for recoverable failures on
//! untrusted input (callers are expected to catch these at their
//! integration boundary and turn them into a domain-appropriate
//! rejection), and [`ConfigError`] for programmer errors, which only
//! constructors and builders can produce and which should crash the
//! calling application's setup phase.
//!
//! Identity is the enum variant, never a message string, and every raise
//! site picks the most specific applicable variant. Failures bubble
//! through composite blueprints unmodified, so the caller always sees
//! the originating component's tag and — for input-data failures — the
//! offending raw value, regardless of nesting depth.

use std::borrow::Cow;

use forma_value::{Value, ValueKind};
use thiserror::Error;

use crate::foundation::Tag;

/// Result of applying a blueprint, filter, or validator.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result of constructing a configurable component.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A recoverable failure raised while processing untrusted input.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The input's runtime type is not accepted by the component's mode.
    #[error("[{tag}] {actual} input is not accepted here (expected {expected}); got {input}")]
    TypeNotInAllowlist {
        tag: Tag,
        expected: Cow<'static, str>,
        actual: ValueKind,
        input: Value,
    },

    /// The input's runtime type is explicitly rejected, even though a
    /// looser mode of the same component would accept it.
    #[error("[{tag}] {kind} input is explicitly rejected here; got {input}")]
    TypeInBlocklist {
        tag: Tag,
        kind: ValueKind,
        input: Value,
    },

    /// The input's type was accepted but its value is malformed for the
    /// target type (e.g. an unparsable numeral).
    #[error("[{tag}] {input} cannot be converted: {reason}")]
    NotConvertible {
        tag: Tag,
        reason: String,
        input: Value,
    },

    /// The input's value falls outside an enumerated closed set for its
    /// type (e.g. an unrecognized boolean token).
    #[error("[{tag}] {input} is not an allowed value: {reason}")]
    ValueNotAllowed {
        tag: Tag,
        reason: String,
        input: Value,
    },

    /// A validator rejected a parsed, well-typed value.
    #[error("[{tag}] validation failed: {message}")]
    ValidationFailed { tag: Tag, message: String },

    /// Structurally invalid input to a composite blueprint: a missing
    /// required key, an unknown key, a malformed pair sequence, or a
    /// JSON document that failed to decode.
    #[error("[{tag}] invalid input data: {reason}")]
    InvalidInput {
        tag: Tag,
        reason: String,
        input: Value,
    },

    /// A naive datetime arrived where an aware one is required and no
    /// assumed offset is configured.
    #[error("[{tag}] naive datetime where an aware one is required: {input}")]
    NaiveDatetime { tag: Tag, input: Value },

    /// The last-resort safety net: a component's core logic panicked.
    /// Carries the panic payload text. Never swallowed by decorators.
    #[error("[{tag}] unexpected failure inside component: {detail}")]
    Unexpected { tag: Tag, detail: String },
}

impl ParseError {
    /// A type-allowlist rejection.
    pub fn type_not_allowed(
        tag: &Tag,
        expected: impl Into<Cow<'static, str>>,
        input: &Value,
    ) -> Self {
        Self::TypeNotInAllowlist {
            tag: tag.clone(),
            expected: expected.into(),
            actual: input.kind(),
            input: input.clone(),
        }
    }

    /// A type-blocklist rejection.
    pub fn type_blocked(tag: &Tag, input: &Value) -> Self {
        Self::TypeInBlocklist {
            tag: tag.clone(),
            kind: input.kind(),
            input: input.clone(),
        }
    }

    /// A malformed-value rejection.
    pub fn not_convertible(tag: &Tag, reason: impl Into<String>, input: &Value) -> Self {
        Self::NotConvertible {
            tag: tag.clone(),
            reason: reason.into(),
            input: input.clone(),
        }
    }

    /// A closed-set rejection.
    pub fn value_not_allowed(tag: &Tag, reason: impl Into<String>, input: &Value) -> Self {
        Self::ValueNotAllowed {
            tag: tag.clone(),
            reason: reason.into(),
            input: input.clone(),
        }
    }

    /// A validator rejection.
    pub fn validation_failed(tag: &Tag, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            tag: tag.clone(),
            message: message.into(),
        }
    }

    /// A structural rejection from a composite blueprint.
    pub fn invalid_input(tag: &Tag, reason: impl Into<String>, input: &Value) -> Self {
        Self::InvalidInput {
            tag: tag.clone(),
            reason: reason.into(),
            input: input.clone(),
        }
    }

    /// A naive-datetime rejection.
    pub fn naive_datetime(tag: &Tag, input: &Value) -> Self {
        Self::NaiveDatetime {
            tag: tag.clone(),
            input: input.clone(),
        }
    }

    /// An unexpected-failure wrapper.
    pub fn unexpected(tag: &Tag, detail: impl Into<String>) -> Self {
        Self::Unexpected {
            tag: tag.clone(),
            detail: detail.into(),
        }
    }

    /// The tag of the component that raised this failure.
    pub const fn tag(&self) -> &Tag {
        match self {
            Self::TypeNotInAllowlist { tag, .. }
            | Self::TypeInBlocklist { tag, .. }
            | Self::NotConvertible { tag, .. }
            | Self::ValueNotAllowed { tag, .. }
            | Self::ValidationFailed { tag, .. }
            | Self::InvalidInput { tag, .. }
            | Self::NaiveDatetime { tag, .. }
            | Self::Unexpected { tag, .. } => tag,
        }
    }

    /// The offending raw input, where the failure carries one.
    pub const fn input(&self) -> Option<&Value> {
        match self {
            Self::TypeNotInAllowlist { input, .. }
            | Self::TypeInBlocklist { input, .. }
            | Self::NotConvertible { input, .. }
            | Self::ValueNotAllowed { input, .. }
            | Self::InvalidInput { input, .. }
            | Self::NaiveDatetime { input, .. } => Some(input),
            Self::ValidationFailed { .. } | Self::Unexpected { .. } => None,
        }
    }

    /// Check whether this is the unexpected-failure wrapper, which
    /// fallback decorators must never swallow.
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected { .. })
    }
}

/// A configuration error: invalid constructor arguments, detected
/// eagerly. Never raised while parsing input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A chain blueprint was given zero stages.
    #[error("a chain blueprint requires at least one stage")]
    EmptyChain,

    /// An object model declares no fields.
    #[error("an object model requires at least one field")]
    EmptyModel,

    /// A predefined dictionary declares no keys.
    #[error("a predefined dictionary requires at least one key")]
    EmptySchema,

    /// A field name was declared twice in one object model.
    #[error("field {name:?} is declared more than once")]
    DuplicateField { name: String },

    /// A key was declared twice in one predefined dictionary.
    #[error("key {key} is declared more than once")]
    DuplicateKey { key: String },

    /// A replacement filter was given an empty table.
    #[error("a replacement table requires at least one entry")]
    EmptyReplacementTable,

    /// An allowlist validator was given an empty set.
    #[error("an allowlist requires at least one entry")]
    EmptyAllowlist,

    /// A clamp filter was given a non-finite bound.
    #[error("clamp bound {bound} is not finite")]
    NonFiniteBound { bound: String },

    /// A lower bound exceeds its upper bound.
    #[error("lower bound {lo} exceeds upper bound {hi}")]
    InvalidBounds { lo: String, hi: String },

    /// A pattern validator was given an uncompilable regex.
    #[error("pattern failed to compile: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A datetime blueprint was given an empty format list.
    #[error("a datetime format list requires at least one format")]
    EmptyFormatList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_tag_and_input() {
        let tag = Tag::from("age");
        let input = Value::text("x");
        let err = ParseError::not_convertible(&tag, "unparsable numeral", &input);
        assert_eq!(err.tag().as_str(), "age");
        assert_eq!(err.input(), Some(&input));
        assert!(!err.is_unexpected());
    }

    #[test]
    fn unexpected_is_flagged() {
        let err = ParseError::unexpected(&Tag::from("x"), "boom");
        assert!(err.is_unexpected());
        assert_eq!(err.input(), None);
    }

    #[test]
    fn display_names_the_component() {
        let err = ParseError::type_not_allowed(&Tag::from("port"), "integer", &Value::text("x"));
        let rendered = err.to_string();
        assert!(rendered.contains("[port]"));
        assert!(rendered.contains("integer"));
    }
}
