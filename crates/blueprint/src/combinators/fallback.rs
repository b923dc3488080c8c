//! Failure-to-default decorator.

use std::fmt;

use forma_value::Value;

use crate::foundation::{Blueprint, ParseResult, Tag};

/// Swallows the wrapped blueprint's recoverable failures and returns a
/// fixed default instead.
///
/// Only failures of the recoverable taxonomy are swallowed; the
/// unexpected-failure wrapper
/// ([`ParseError::Unexpected`](crate::foundation::ParseError::Unexpected))
/// propagates, since it signals a faulty component rather than bad
/// input.
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// let bp = integer().or_default(0);
/// assert_eq!(bp.apply(&Value::text("garbage")).unwrap(), 0);
/// ```
pub struct Fallback<B: Blueprint> {
    tag: Tag,
    inner: B,
    default: B::Output,
}

impl<B: Blueprint + fmt::Debug> fmt::Debug for Fallback<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallback")
            .field("tag", &self.tag)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<B: Blueprint> Fallback<B> {
    /// Wrap `inner`, substituting `default` for its recoverable
    /// failures.
    #[must_use]
    pub fn new(inner: B, default: B::Output) -> Self {
        Self {
            tag: Tag::default(),
            inner,
            default,
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The wrapped blueprint.
    pub const fn inner(&self) -> &B {
        &self.inner
    }

    /// The configured default.
    pub const fn default_value(&self) -> &B::Output {
        &self.default
    }
}

impl<B> Blueprint for Fallback<B>
where
    B: Blueprint,
    B::Output: Clone,
{
    type Output = B::Output;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<B::Output> {
        match self.inner.apply(input) {
            Ok(value) => Ok(value),
            Err(error) if error.is_unexpected() => Err(error),
            Err(error) => {
                tracing::debug!(tag = %self.tag, %error, "substituting fallback default");
                Ok(self.default.clone())
            }
        }
    }
}
