//! Text leaf blueprint.

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

type Routine = fn(&TextBlueprint, &Value) -> ParseResult<String>;

/// Parses untrusted input into a `String`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | text |
/// | rational | + integers and floats (display form) |
/// | loose | + booleans, + datetimes (RFC 3339), + UTF-8 bytes |
#[derive(Debug)]
pub struct TextBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    finishing: Finishing<String>,
}

impl TextBlueprint {
    /// A rational-mode text blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// A text blueprint with an explicit mode. The parse routine is
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
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = String> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = String> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<String>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<String>] {
        self.finishing.validators()
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<String> {
        match input {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }

    fn parse_rational(&self, input: &Value) -> ParseResult<String> {
        match input {
            Value::Text(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }

    fn parse_loose(&self, input: &Value) -> ParseResult<String> {
        match input {
            Value::Text(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::DateTime(dt) => Ok(dt.to_rfc3339()),
            Value::Bytes(b) => String::from_utf8(b.clone()).map_err(|e| {
                ParseError::not_convertible(&self.tag, format!("invalid UTF-8: {e}"), input)
            }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }
}

impl Default for TextBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for TextBlueprint {
    type Output = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<String> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode text blueprint.
#[must_use]
pub fn text() -> TextBlueprint {
    TextBlueprint::new()
}
