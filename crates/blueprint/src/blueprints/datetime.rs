//! Datetime leaf blueprint.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, ConfigError, ConfigResult, Filter, Finishing,
    ParseError, ParseResult, ParsingMode, Tag, Validator,
};

type Routine = fn(&DateTimeBlueprint, &Value) -> ParseResult<DateTime<FixedOffset>>;

/// Fallback formats tried, in order, by loose parsing when the input is
/// not RFC 3339.
const DEFAULT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses untrusted input into a timezone-aware
/// `chrono::DateTime<FixedOffset>`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | datetimes |
/// | rational | + RFC 3339 text |
/// | loose | + unix-second integers (UTC), + text tried against the configured format list |
///
/// A fallback format without a zone yields a naive datetime; that is
/// accepted only when an assumed offset is configured via
/// [`assume_offset`](DateTimeBlueprint::assume_offset), and rejected
/// with [`NaiveDatetime`](ParseError::NaiveDatetime) otherwise.
#[derive(Debug)]
pub struct DateTimeBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    formats: Vec<String>,
    assume: Option<FixedOffset>,
    finishing: Finishing<DateTime<FixedOffset>>,
}

impl DateTimeBlueprint {
    /// A rational-mode datetime blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// A datetime blueprint with an explicit mode. The parse routine is
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
            formats: DEFAULT_FORMATS.iter().map(ToString::to_string).collect(),
            assume: None,
            finishing: Finishing::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Replace the fallback format list tried by loose parsing. An
    /// empty list is a configuration error.
    pub fn with_formats(
        mut self,
        formats: impl IntoIterator<Item = impl Into<String>>,
    ) -> ConfigResult<Self> {
        let formats: Vec<String> = formats.into_iter().map(Into::into).collect();
        if formats.is_empty() {
            return Err(ConfigError::EmptyFormatList);
        }
        self.formats = formats;
        Ok(self)
    }

    /// Interpret naive fallback results as local to `offset`.
    #[must_use]
    pub fn assume_offset(mut self, offset: FixedOffset) -> Self {
        self.assume = Some(offset);
        self
    }

    /// Append a filter to the chain.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = DateTime<FixedOffset>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = DateTime<FixedOffset>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured fallback format list.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<DateTime<FixedOffset>>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<DateTime<FixedOffset>>] {
        self.finishing.validators()
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<DateTime<FixedOffset>> {
        match input {
            Value::DateTime(dt) => Ok(*dt),
            _ => Err(ParseError::type_not_allowed(&self.tag, "datetime", input)),
        }
    }

    fn parse_rational(&self, input: &Value) -> ParseResult<DateTime<FixedOffset>> {
        match input {
            Value::DateTime(dt) => Ok(*dt),
            Value::Text(s) => DateTime::parse_from_rfc3339(s.trim()).map_err(|e| {
                ParseError::not_convertible(&self.tag, format!("not RFC 3339: {e}"), input)
            }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "datetime", input)),
        }
    }

    fn parse_loose(&self, input: &Value) -> ParseResult<DateTime<FixedOffset>> {
        match input {
            Value::DateTime(dt) => Ok(*dt),
            Value::Text(s) => self.parse_fallback_text(s.trim(), input),
            Value::Integer(secs) => DateTime::from_timestamp(*secs, 0)
                .map(|dt| dt.fixed_offset())
                .ok_or_else(|| {
                    ParseError::not_convertible(&self.tag, "timestamp out of range", input)
                }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "datetime", input)),
        }
    }

    fn parse_fallback_text(
        &self,
        trimmed: &str,
        input: &Value,
    ) -> ParseResult<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt);
        }
        for format in &self.formats {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(dt);
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return self.resolve_naive(naive, input);
            }
        }
        Err(ParseError::not_convertible(
            &self.tag,
            "does not match any configured datetime format",
            input,
        ))
    }

    fn resolve_naive(
        &self,
        naive: NaiveDateTime,
        input: &Value,
    ) -> ParseResult<DateTime<FixedOffset>> {
        match self.assume {
            Some(offset) => naive
                .and_local_timezone(offset)
                .single()
                .ok_or_else(|| {
                    ParseError::not_convertible(&self.tag, "ambiguous local datetime", input)
                }),
            None => Err(ParseError::naive_datetime(&self.tag, input)),
        }
    }
}

impl Default for DateTimeBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for DateTimeBlueprint {
    type Output = DateTime<FixedOffset>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<DateTime<FixedOffset>> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode datetime blueprint.
#[must_use]
pub fn datetime() -> DateTimeBlueprint {
    DateTimeBlueprint::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aware(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    #[test]
    fn strict_accepts_datetimes_only() {
        let bp = DateTimeBlueprint::with_mode(ParsingMode::Strict);
        let dt = aware("2024-05-01T12:00:00+02:00");
        assert_eq!(bp.apply(&Value::datetime(dt)).unwrap(), dt);
        assert!(bp.apply(&Value::text("2024-05-01T12:00:00+02:00")).is_err());
    }

    #[test]
    fn rational_parses_rfc3339() {
        let bp = datetime();
        let parsed = bp.apply(&Value::text("2024-05-01T12:00:00+02:00")).unwrap();
        assert_eq!(parsed, aware("2024-05-01T12:00:00+02:00"));
        assert!(bp.apply(&Value::text("2024-05-01 12:00:00")).is_err());
    }

    #[test]
    fn loose_accepts_unix_seconds() {
        let bp = DateTimeBlueprint::with_mode(ParsingMode::Loose);
        let parsed = bp.apply(&Value::integer(0)).unwrap();
        assert_eq!(parsed, aware("1970-01-01T00:00:00+00:00"));
    }

    #[test]
    fn naive_fallback_requires_an_assumed_offset() {
        let bp = DateTimeBlueprint::with_mode(ParsingMode::Loose);
        let err = bp.apply(&Value::text("2024-05-01 12:00:00")).unwrap_err();
        assert!(matches!(err, ParseError::NaiveDatetime { .. }));

        let bp = DateTimeBlueprint::with_mode(ParsingMode::Loose)
            .assume_offset(FixedOffset::east_opt(3600).unwrap());
        let parsed = bp.apply(&Value::text("2024-05-01 12:00:00")).unwrap();
        assert_eq!(parsed, aware("2024-05-01T12:00:00+01:00"));
    }

    #[test]
    fn formats_are_tried_in_order() {
        let bp = DateTimeBlueprint::with_mode(ParsingMode::Loose)
            .with_formats(["%d.%m.%Y %H:%M"])
            .unwrap()
            .assume_offset(FixedOffset::east_opt(0).unwrap());
        let parsed = bp.apply(&Value::text("01.05.2024 09:30")).unwrap();
        assert_eq!(parsed, aware("2024-05-01T09:30:00+00:00"));
        // The replaced default list no longer applies.
        assert!(bp.apply(&Value::text("2024-05-01 09:30:00")).is_err());
    }

    #[test]
    fn empty_format_list_is_a_config_error() {
        let result = DateTimeBlueprint::with_mode(ParsingMode::Loose)
            .with_formats(Vec::<String>::new());
        assert!(matches!(result, Err(ConfigError::EmptyFormatList)));
    }
}
