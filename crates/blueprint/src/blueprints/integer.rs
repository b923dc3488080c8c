//! Integer leaf blueprint.

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

type Routine = fn(&IntegerBlueprint, &Value) -> ParseResult<i64>;

/// Parses untrusted input into an `i64`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | integers |
/// | rational | + integral floats, + trimmed decimal text |
/// | loose | + booleans, + text holding an integral float, + datetimes (unix seconds) |
///
/// Booleans are explicitly rejected under rational parsing
/// ([`TypeInBlocklist`](ParseError::TypeInBlocklist)): a flag is not a
/// number until the caller opts into loose coercion.
#[derive(Debug)]
pub struct IntegerBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    finishing: Finishing<i64>,
}

impl IntegerBlueprint {
    /// A rational-mode integer blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// An integer blueprint with an explicit mode. The parse routine is
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
    pub fn with_filter(mut self, filter: impl Filter<Data = i64> + Send + Sync + 'static) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = i64> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<i64>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<i64>] {
        self.finishing.validators()
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn integral(&self, f: f64, input: &Value) -> ParseResult<i64> {
        if !f.is_finite() {
            return Err(ParseError::not_convertible(
                &self.tag,
                "non-finite number",
                input,
            ));
        }
        if f.fract() != 0.0 {
            return Err(ParseError::not_convertible(
                &self.tag,
                "has a fractional part",
                input,
            ));
        }
        // i64::MAX as f64 rounds up to 2^63, which is out of range, so
        // the comparison must be exclusive on the high side.
        if f >= (i64::MAX as f64) || f < (i64::MIN as f64) {
            return Err(ParseError::not_convertible(
                &self.tag,
                "out of range for a 64-bit integer",
                input,
            ));
        }
        Ok(f as i64)
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<i64> {
        match input {
            Value::Integer(i) => Ok(*i),
            _ => Err(ParseError::type_not_allowed(&self.tag, "integer", input)),
        }
    }

    fn parse_rational(&self, input: &Value) -> ParseResult<i64> {
        match input {
            Value::Integer(i) => Ok(*i),
            Value::Float(f) => self.integral(*f, input),
            Value::Text(s) => s.trim().parse::<i64>().map_err(|e| {
                ParseError::not_convertible(&self.tag, format!("unparsable numeral: {e}"), input)
            }),
            Value::Boolean(_) => Err(ParseError::type_blocked(&self.tag, input)),
            _ => Err(ParseError::type_not_allowed(&self.tag, "integer", input)),
        }
    }

    fn parse_loose(&self, input: &Value) -> ParseResult<i64> {
        match input {
            Value::Integer(i) => Ok(*i),
            Value::Float(f) => self.integral(*f, input),
            Value::Text(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(i);
                }
                let f = trimmed.parse::<f64>().map_err(|e| {
                    ParseError::not_convertible(
                        &self.tag,
                        format!("unparsable numeral: {e}"),
                        input,
                    )
                })?;
                self.integral(f, input)
            }
            Value::Boolean(b) => Ok(i64::from(*b)),
            Value::DateTime(dt) => Ok(dt.timestamp()),
            _ => Err(ParseError::type_not_allowed(&self.tag, "integer", input)),
        }
    }
}

impl Default for IntegerBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for IntegerBlueprint {
    type Output = i64;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<i64> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode integer blueprint.
#[must_use]
pub fn integer() -> IntegerBlueprint {
    IntegerBlueprint::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_integers_only() {
        let bp = IntegerBlueprint::with_mode(ParsingMode::Strict);
        assert_eq!(bp.apply(&Value::integer(42)).unwrap(), 42);
        assert!(bp.apply(&Value::text("42")).is_err());
        assert!(bp.apply(&Value::float(42.0)).is_err());
    }

    #[test]
    fn rational_parses_numeric_text() {
        let bp = integer();
        assert_eq!(bp.apply(&Value::text("-17")).unwrap(), -17);
        assert_eq!(bp.apply(&Value::text(" 8 ")).unwrap(), 8);
        assert!(matches!(
            bp.apply(&Value::text("8.5")).unwrap_err(),
            ParseError::NotConvertible { .. }
        ));
    }

    #[test]
    fn rational_accepts_integral_floats() {
        let bp = integer();
        assert_eq!(bp.apply(&Value::float(5.0)).unwrap(), 5);
        assert!(matches!(
            bp.apply(&Value::float(5.5)).unwrap_err(),
            ParseError::NotConvertible { .. }
        ));
        assert!(bp.apply(&Value::float(f64::NAN)).is_err());
    }

    #[test]
    fn rational_blocklists_booleans() {
        let bp = integer();
        assert!(matches!(
            bp.apply(&Value::boolean(true)).unwrap_err(),
            ParseError::TypeInBlocklist { .. }
        ));
    }

    #[test]
    fn loose_coerces_booleans_and_float_text() {
        let bp = IntegerBlueprint::with_mode(ParsingMode::Loose);
        assert_eq!(bp.apply(&Value::boolean(true)).unwrap(), 1);
        assert_eq!(bp.apply(&Value::text("5.0")).unwrap(), 5);
        assert!(bp.apply(&Value::text("5.5")).is_err());
    }

    #[test]
    fn huge_float_is_out_of_range() {
        let bp = integer();
        assert!(matches!(
            bp.apply(&Value::float(1.0e19)).unwrap_err(),
            ParseError::NotConvertible { .. }
        ));
    }

    #[test]
    fn errors_carry_the_tag_and_input() {
        let bp = integer().with_tag("age");
        let err = bp.apply(&Value::text("old")).unwrap_err();
        assert_eq!(err.tag().as_str(), "age");
        assert_eq!(err.input(), Some(&Value::text("old")));
    }
}
