//! Parsing strictness modes.

use std::fmt;

/// How liberal a leaf blueprint is about the source type of its input.
///
/// Each mode is a strict superset of the one below it: anything
/// [`Strict`](ParsingMode::Strict) accepts is accepted by
/// [`Rational`](ParsingMode::Rational), and anything `Rational` accepts
/// is accepted by [`Loose`](ParsingMode::Loose) — with the identical
/// output value wherever two modes both accept an input.
///
/// The mode is fixed at construction; a blueprint selects its parse
/// routine once and never re-checks the mode per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParsingMode {
    /// Input may be almost anything minimally convertible to the target
    /// type.
    Loose,

    /// Input may be the target type or a small set of reasonable
    /// convertible shapes (e.g. a numeric string for an integer). The
    /// default for every leaf blueprint.
    #[default]
    Rational,

    /// Input must already be of the target type (or one of a small,
    /// closed set of equivalent representations).
    Strict,
}

impl ParsingMode {
    /// All modes, in loosest-to-strictest order.
    pub const fn all() -> [Self; 3] {
        [Self::Loose, Self::Rational, Self::Strict]
    }

    /// Lowercase name, as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Loose => "loose",
            Self::Rational => "rational",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ParsingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rational() {
        assert_eq!(ParsingMode::default(), ParsingMode::Rational);
    }

    #[test]
    fn names() {
        assert_eq!(ParsingMode::Strict.to_string(), "strict");
        assert_eq!(ParsingMode::all().len(), 3);
    }
}
