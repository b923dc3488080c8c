//! Value kinds and classification predicates.
//!
//! `ValueKind` is a lightweight, copyable classification for [`Value`],
//! used in diagnostics ("expected integer, got text") and in the
//! mode-gated acceptance checks of the blueprint layer.

use core::fmt::{Display, Formatter};

use crate::Value;

/// Represents the kind/type of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Bytes,
    Array,
    Object,
    DateTime,
}

impl ValueKind {
    /// Get all kinds this model distinguishes.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::Bytes,
            Self::Array,
            Self::Object,
            Self::DateTime,
        ]
    }

    /// Classify a value.
    pub const fn from_value(value: &Value) -> Self {
        value.kind()
    }

    /// Check if this kind is numeric.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection.
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is a scalar (not a collection).
    pub const fn is_scalar(self) -> bool {
        !self.is_collection()
    }

    /// Check if this kind is temporal.
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime)
    }

    /// Lowercase name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Object => "object",
            Self::DateTime => "datetime",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::Text.is_numeric());
    }

    #[test]
    fn collection_kinds() {
        assert!(ValueKind::Array.is_collection());
        assert!(ValueKind::Object.is_collection());
        assert!(ValueKind::Null.is_scalar());
    }

    #[test]
    fn display_is_lowercase() {
        for kind in ValueKind::all() {
            let name = kind.to_string();
            assert_eq!(name, name.to_lowercase());
        }
    }
}
