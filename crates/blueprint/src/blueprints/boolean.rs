//! Boolean leaf blueprint.

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

type Routine = fn(&BooleanBlueprint, &Value) -> ParseResult<bool>;

/// Recognized boolean tokens and their meanings. The set is closed:
/// under rational parsing any other text is a
/// [`ValueNotAllowed`](ParseError::ValueNotAllowed) rejection.
const TOKENS: [(&str, bool); 8] = [
    ("true", true),
    ("false", false),
    ("yes", true),
    ("no", false),
    ("on", true),
    ("off", false),
    ("1", true),
    ("0", false),
];

/// Parses untrusted input into a `bool`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | booleans |
/// | rational | + integers 0/1, + the closed token set |
/// | loose | + anything, by truthiness of its kind |
///
/// Tokens recognized by rational parsing keep their meaning under loose
/// parsing, so any input two modes both accept yields the same output.
#[derive(Debug)]
pub struct BooleanBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    finishing: Finishing<bool>,
}

impl BooleanBlueprint {
    /// A rational-mode boolean blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// A boolean blueprint with an explicit mode. The parse routine is
    /// selected here, once.
    #[must_use]
    pub fn with_mode(mode: ParsingMode) -> Self {
        Self {
            tag: Tag::default(),
            mode,
            routine: match mode {
                ParsingMode::Strict => Self::parse_strict,
                ParsingMode::Rational => Self::parse_rational,
                ParsingMode::Loose => Self::parse_loose,
            },
            finishing: Finishing::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Append a filter to the chain.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Filter<Data = bool> + Send + Sync + 'static) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = bool> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<bool>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<bool>] {
        self.finishing.validators()
    }

    fn token(text: &str) -> Option<bool> {
        let needle = text.trim().to_ascii_lowercase();
        TOKENS
            .iter()
            .find(|(token, _)| *token == needle)
            .map(|(_, value)| *value)
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<bool> {
        match input {
            Value::Boolean(b) => Ok(*b),
            _ => Err(ParseError::type_not_allowed(&self.tag, "boolean", input)),
        }
    }

    fn parse_rational(&self, input: &Value) -> ParseResult<bool> {
        match input {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Integer(_) => Err(ParseError::value_not_allowed(
                &self.tag,
                "integer booleans are 0 or 1",
                input,
            )),
            Value::Text(s) => Self::token(s).ok_or_else(|| {
                ParseError::value_not_allowed(&self.tag, "unrecognized boolean token", input)
            }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "boolean", input)),
        }
    }

    fn parse_loose(&self, input: &Value) -> ParseResult<bool> {
        match input {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0),
            Value::Text(s) => Ok(Self::token(s).unwrap_or_else(|| !s.is_empty())),
            Value::Null => Ok(false),
            Value::Bytes(b) => Ok(!b.is_empty()),
            Value::Array(items) => Ok(!items.is_empty()),
            Value::Object(o) => Ok(!o.is_empty()),
            Value::DateTime(_) => Ok(true),
        }
    }
}

impl Default for BooleanBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for BooleanBlueprint {
    type Output = bool;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<bool> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode boolean blueprint.
#[must_use]
pub fn boolean() -> BooleanBlueprint {
    BooleanBlueprint::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_booleans_only() {
        let bp = BooleanBlueprint::with_mode(ParsingMode::Strict);
        assert!(bp.apply(&Value::boolean(true)).unwrap());
        assert!(matches!(
            bp.apply(&Value::integer(1)).unwrap_err(),
            ParseError::TypeNotInAllowlist { .. }
        ));
    }

    #[test]
    fn rational_accepts_zero_and_one() {
        let bp = boolean();
        assert!(!bp.apply(&Value::integer(0)).unwrap());
        assert!(bp.apply(&Value::integer(1)).unwrap());
        assert!(matches!(
            bp.apply(&Value::integer(5)).unwrap_err(),
            ParseError::ValueNotAllowed { .. }
        ));
    }

    #[test]
    fn rational_tokens_are_a_closed_set() {
        let bp = boolean();
        assert!(bp.apply(&Value::text("Yes")).unwrap());
        assert!(!bp.apply(&Value::text(" off ")).unwrap());
        assert!(matches!(
            bp.apply(&Value::text("maybe")).unwrap_err(),
            ParseError::ValueNotAllowed { .. }
        ));
    }

    #[test]
    fn loose_falls_back_to_truthiness() {
        let bp = BooleanBlueprint::with_mode(ParsingMode::Loose);
        assert!(bp.apply(&Value::text("maybe")).unwrap());
        assert!(!bp.apply(&Value::text("")).unwrap());
        assert!(!bp.apply(&Value::Null).unwrap());
        assert!(bp.apply(&Value::integer(5)).unwrap());
        // Tokens keep their rational meaning.
        assert!(!bp.apply(&Value::text("false")).unwrap());
    }
}
