//! Null-propagation decorator.

use std::fmt;

use forma_value::Value;

use crate::foundation::{Blueprint, ParseResult, Tag};

/// Short-circuits null input instead of delegating it.
///
/// Null parses to `None` — or to `Some(default)` when constructed with
/// [`with_default`](Noneable::with_default) — without the wrapped
/// blueprint ever seeing the input. Anything else delegates fully.
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// let bp = integer().noneable();
/// assert_eq!(bp.apply(&Value::Null).unwrap(), None);
/// assert_eq!(bp.apply(&Value::text("3")).unwrap(), Some(3));
/// ```
pub struct Noneable<B: Blueprint> {
    tag: Tag,
    inner: B,
    default: Option<B::Output>,
}

impl<B: Blueprint + fmt::Debug> fmt::Debug for Noneable<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Noneable")
            .field("tag", &self.tag)
            .field("inner", &self.inner)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

impl<B: Blueprint> Noneable<B> {
    /// Null passes through as `None`.
    #[must_use]
    pub fn new(inner: B) -> Self {
        Self {
            tag: Tag::default(),
            inner,
            default: None,
        }
    }

    /// Null parses to `Some(default)`.
    #[must_use]
    pub fn with_default(inner: B, default: B::Output) -> Self {
        Self {
            tag: Tag::default(),
            inner,
            default: Some(default),
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
}

impl<B> Blueprint for Noneable<B>
where
    B: Blueprint,
    B::Output: Clone,
{
    type Output = Option<B::Output>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Option<B::Output>> {
        if input.is_null() {
            return Ok(self.default.clone());
        }
        self.inner.apply(input).map(Some)
    }
}
