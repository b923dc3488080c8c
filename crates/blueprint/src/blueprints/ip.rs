//! IP address leaf blueprint.

use std::net::{IpAddr, Ipv4Addr};

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

type Routine = fn(&IpAddressBlueprint, &Value) -> ParseResult<IpAddr>;

/// Parses untrusted input into a `std::net::IpAddr`.
///
/// | mode | accepted |
/// |---|---|
/// | strict | text in standard v4/v6 notation |
/// | rational | the same, with surrounding whitespace tolerated |
/// | loose | + integers in u32 range, read as an IPv4 address |
///
/// There is no dedicated address shape in the value model, so text is
/// the native representation at every strictness level.
#[derive(Debug)]
pub struct IpAddressBlueprint {
    tag: Tag,
    mode: ParsingMode,
    routine: Routine,
    finishing: Finishing<IpAddr>,
}

impl IpAddressBlueprint {
    /// A rational-mode IP address blueprint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ParsingMode::default())
    }

    /// An IP address blueprint with an explicit mode. The parse routine
    /// is selected here, once.
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
        filter: impl Filter<Data = IpAddr> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator to the chain.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = IpAddr> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<IpAddr>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<IpAddr>] {
        self.finishing.validators()
    }

    fn parse_notation(&self, s: &str, input: &Value) -> ParseResult<IpAddr> {
        s.parse::<IpAddr>().map_err(|e| {
            ParseError::not_convertible(&self.tag, format!("not an IP address: {e}"), input)
        })
    }

    fn parse_strict(&self, input: &Value) -> ParseResult<IpAddr> {
        match input {
            Value::Text(s) => self.parse_notation(s, input),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }

    fn parse_rational(&self, input: &Value) -> ParseResult<IpAddr> {
        match input {
            Value::Text(s) => self.parse_notation(s.trim(), input),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }

    fn parse_loose(&self, input: &Value) -> ParseResult<IpAddr> {
        match input {
            Value::Text(s) => self.parse_notation(s.trim(), input),
            Value::Integer(i) => u32::try_from(*i)
                .map(|raw| IpAddr::V4(Ipv4Addr::from(raw)))
                .map_err(|_| {
                    ParseError::not_convertible(
                        &self.tag,
                        "out of range for an IPv4 address",
                        input,
                    )
                }),
            _ => Err(ParseError::type_not_allowed(&self.tag, "text", input)),
        }
    }
}

impl Default for IpAddressBlueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint for IpAddressBlueprint {
    type Output = IpAddr;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<IpAddr> {
        let parsed = (self.routine)(self, input)?;
        self.finishing.apply(parsed)
    }
}

/// Creates a rational-mode IP address blueprint.
#[must_use]
pub fn ip_address() -> IpAddressBlueprint {
    IpAddressBlueprint::new()
}
