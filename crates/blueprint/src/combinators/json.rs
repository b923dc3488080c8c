//! JSON envelope blueprint.

use forma_value::Value;

use crate::foundation::{Blueprint, ParseError, ParseResult, Tag};

/// Characters tolerated around the JSON text before decoding: ASCII
/// whitespace plus the NEL / LINE SEPARATOR / PARAGRAPH SEPARATOR
/// line-break characters.
fn is_envelope_padding(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Decodes a JSON document out of textual input, then delegates the
/// decoded value to a wrapped blueprint.
///
/// Only text is accepted, regardless of how liberal the wrapped
/// blueprint is — the envelope is a transport, not a coercion. A
/// malformed document is an
/// [`InvalidInput`](ParseError::InvalidInput) rejection carrying the
/// decoder's message; a well-formed one is converted to a [`Value`] and
/// handed to the wrapped blueprint, whose result or failure passes
/// through unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// let bp = json(list(integer()));
/// assert_eq!(bp.apply(&Value::text("[1, 2]")).unwrap(), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct JsonBlueprint<B> {
    tag: Tag,
    inner: B,
}

impl<B: Blueprint> JsonBlueprint<B> {
    /// Wrap `inner` behind a JSON decode.
    #[must_use]
    pub fn new(inner: B) -> Self {
        Self {
            tag: Tag::default(),
            inner,
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

impl<B: Blueprint> Blueprint for JsonBlueprint<B> {
    type Output = B::Output;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<B::Output> {
        let Some(text) = input.as_text() else {
            return Err(ParseError::type_not_allowed(&self.tag, "text", input));
        };
        let document = text.trim_matches(is_envelope_padding);
        let decoded = serde_json::from_str::<serde_json::Value>(document)
            .map(Value::from)
            .map_err(|error| {
                tracing::debug!(tag = %self.tag, %error, "JSON decode failed");
                ParseError::invalid_input(&self.tag, format!("malformed JSON: {error}"), input)
            })?;
        self.inner.apply(&decoded)
    }
}

/// Creates a JSON envelope around `inner`.
#[must_use]
pub fn json<B: Blueprint>(inner: B) -> JsonBlueprint<B> {
    JsonBlueprint::new(inner)
}
