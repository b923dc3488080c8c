//! Diagnostic tags.

use std::borrow::Cow;
use std::fmt;

/// An opaque diagnostic label attached to a component at construction.
///
/// Tags propagate into every failure the component raises, so a caller
/// looking at an error deep out of a nested schema can tell which leaf
/// produced it. They are never used for control flow.
///
/// Uses `Cow<'static, str>` for zero-allocation in the common case of
/// string-literal tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// The empty tag, used when a component was not given one.
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(""))
    }

    /// Create a tag.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this is the empty tag.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for Tag {
    fn from(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Self(Cow::Owned(label))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
