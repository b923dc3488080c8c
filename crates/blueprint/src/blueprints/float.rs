//! Float leaf blueprint.

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

type Routine = fn(&FloatBlueprint, &Value) -> ParseResult<f64>;

/// Parses untrusted input into an `f64`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | floats |
/// | rational | + integers, + trimmed numeric text |
/// | loose | + booleans |
///
/// Text goes through the standard `f64` grammar, so `"3e5"`, `"inf"`,
/// and `"NaN"` parse; use a validator to reject non-finite results
/// where they are unwelcome.
#[derive(Debug)]
pub struct FloatBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    finishing: Finishing<f64>,
}

impl FloatBlueprint {
    /// A rational-mode float blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// A float blueprint with an explicit mode. The parse routine is
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
    pub fn with_filter(mut self, filter: impl Filter<Data = f64> + Send + Sync + 'static) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = f64> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<f64>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<f64>] {
        self.finishing.validators()
    }

    fn parse_text(&self, s: &str, input: &Value) -> ParseResult<f64> {
        s.trim().parse::<f64>().map_err(|e| {
            ParseError::not_convertible(&self.tag, format!("unparsable numeral: {e}"), input)
        })
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<f64> {
        match input {
            Value::Float(f) => Ok(*f),
            _ => Err(ParseError::type_not_allowed(&self.tag, "float", input)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn parse_rational(&self, input: &Value) -> ParseResult<f64> {
        match input {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::Text(s) => self.parse_text(s, input),
            Value::Boolean(_) => Err(ParseError::type_blocked(&self.tag, input)),
            _ => Err(ParseError::type_not_allowed(&self.tag, "float", input)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn parse_loose(&self, input: &Value) -> ParseResult<f64> {
        match input {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::Text(s) => self.parse_text(s, input),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "float", input)),
        }
    }
}

impl Default for FloatBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for FloatBlueprint {
    type Output = f64;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<f64> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode float blueprint.
#[must_use]
pub fn float() -> FloatBlueprint {
    FloatBlueprint::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_floats_only() {
        let bp = FloatBlueprint::with_mode(ParsingMode::Strict);
        assert!((bp.apply(&Value::float(1.5)).unwrap() - 1.5).abs() < f64::EPSILON);
        assert!(bp.apply(&Value::integer(1)).is_err());
    }

    #[test]
    fn rational_widens_integers() {
        let bp = float();
        assert!((bp.apply(&Value::integer(3)).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rational_parses_scientific_notation() {
        let bp = float();
        assert!((bp.apply(&Value::text("3e2")).unwrap() - 300.0).abs() < f64::EPSILON);
        assert!(bp.apply(&Value::text("three")).is_err());
    }

    #[test]
    fn rational_blocklists_booleans() {
        let bp = float();
        assert!(matches!(
            bp.apply(&Value::boolean(false)).unwrap_err(),
            ParseError::TypeInBlocklist { .. }
        ));
    }

    #[test]
    fn loose_coerces_booleans() {
        let bp = FloatBlueprint::with_mode(ParsingMode::Loose);
        assert!((bp.apply(&Value::boolean(true)).unwrap() - 1.0).abs() < f64::EPSILON);
    }
}
