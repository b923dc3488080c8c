//! List-of-item blueprint.

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

/// Applies one child blueprint to every element of a sequence, in
/// order, producing a freshly-allocated `Vec`.
///
/// The first failing element aborts the whole call and its failure
/// propagates unchanged — original kind, tag, and offending value — and
/// no partial list is ever observable.
///
/// Strict and rational parsing require an actual array. Loose parsing
/// additionally iterates text (one-character texts) and objects (their
/// keys, as text), the two other value shapes with an unambiguous
/// iteration order.
#[derive(Debug)]
pub struct ListBlueprint<B: Blueprint> {
    tag: Tag,
    mode: ParsingMode,
    item: B,
    finishing: Finishing<Vec<B::Output>>,
}

impl<B: Blueprint> ListBlueprint<B> {
    /// A rational-mode list over `item`.
    #[must_use]
    pub fn new(item: B) -> Self {
        Self::with_mode(item, ParsingMode::default())
    }

    /// A list blueprint with an explicit mode.
    #[must_use]
    pub fn with_mode(item: B, mode: ParsingMode) -> Self {
        Self {
            tag: Tag::default(),
            mode,
            item,
            finishing: Finishing::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Append a filter over the whole parsed list.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = Vec<B::Output>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator over the whole parsed list.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = Vec<B::Output>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The child item blueprint.
    pub const fn item(&self) -> &B {
        &self.item
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<Vec<B::Output>>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<Vec<B::Output>>] {
        self.finishing.validators()
    }

    fn parse_items(&self, input: &Value) -> ParseResult<Vec<B::Output>> {
        match (self.mode, input) {
            (_, Value::Array(items)) => {
                items.iter().map(|item| self.item.apply(item)).collect()
            }
            (ParsingMode::Loose, Value::Text(s)) => s
                .chars()
                .map(|c| self.item.apply(&Value::text(c.to_string())))
                .collect(),
            (ParsingMode::Loose, Value::Object(o)) => o
                .keys()
                .map(|key| self.item.apply(&Value::text(key)))
                .collect(),
            _ => Err(ParseError::type_not_allowed(&self.tag, "array", input)),
        }
    }
}

impl<B: Blueprint> Blueprint for ListBlueprint<B> {
    type Output = Vec<B::Output>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Vec<B::Output>> {
        let items = self.parse_items(input)?;
        self.finishing.apply(items)
    }
}

/// Creates a rational-mode list blueprint over `item`.
#[must_use]
pub fn list<B: Blueprint>(item: B) -> ListBlueprint<B> {
    ListBlueprint::new(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprints::{integer, text};

    fn raw_list(items: &[&str]) -> Value {
        Value::array(items.iter().map(|s| Value::text(*s)))
    }

    #[test]
    fn parses_elements_in_order() {
        let bp = list(integer());
        let parsed = bp.apply(&raw_list(&["1", "2", "-3"])).unwrap();
        assert_eq!(parsed, vec![1, 2, -3]);
    }

    #[test]
    fn empty_array_parses_to_empty_vec() {
        let bp = list(integer());
        assert_eq!(bp.apply(&Value::array([])).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn first_bad_element_aborts_with_child_error() {
        let bp = list(integer().with_tag("item"));
        let input = Value::array([Value::integer(1), Value::text("bad"), Value::integer(3)]);
        let err = bp.apply(&input).unwrap_err();
        assert!(matches!(err, ParseError::NotConvertible { .. }));
        assert_eq!(err.tag().as_str(), "item");
        assert_eq!(err.input(), Some(&Value::text("bad")));
    }

    #[test]
    fn rational_rejects_non_arrays() {
        let bp = list(text());
        assert!(matches!(
            bp.apply(&Value::text("abc")).unwrap_err(),
            ParseError::TypeNotInAllowlist { .. }
        ));
    }

    #[test]
    fn loose_iterates_text_and_object_keys() {
        let bp = ListBlueprint::with_mode(text(), ParsingMode::Loose);
        assert_eq!(bp.apply(&Value::text("abc")).unwrap(), ["a", "b", "c"]);

        let input = Value::object([
            ("x".to_string(), Value::integer(1)),
            ("y".to_string(), Value::integer(2)),
        ]);
        assert_eq!(bp.apply(&input).unwrap(), ["x", "y"]);
    }
}
