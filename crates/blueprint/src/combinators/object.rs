//! Fixed-schema object blueprint.

use forma_value::{Object, Value};

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult, Tag,
    Validator,
};
use crate::model::ObjectModel;

/// Parses a mapping-like input against an [`ObjectModel`], producing an
/// [`Object`] holding exactly the declared fields, in declaration
/// order.
///
/// Accepted input is an object, or an array of two-element
/// `[text-key, value]` pairs convertible to one; anything else is a
/// [`NotConvertible`](ParseError::NotConvertible) rejection.
///
/// Policy knobs:
/// - unknown input keys fail the call unless
///   [`ignore_unknown_keys`](ObjectBlueprint::ignore_unknown_keys) is
///   set;
/// - a declared key absent from input either takes the field's default
///   (optional fields, child blueprint not invoked) or fails the call.
///
/// Keys match by exact equality — a key with stray whitespace is a
/// different key. Either every field parses and a fully-populated
/// result is returned, or the call fails with one error and no partial
/// result is observable.
#[derive(Debug)]
pub struct ObjectBlueprint {
    tag: Tag,
    model: ObjectModel,
    ignore_unknown_keys: bool,
    finishing: Finishing<Object>,
}

impl ObjectBlueprint {
    /// An object blueprint over `model`. Unknown input keys are
    /// rejected by default.
    #[must_use]
    pub fn new(model: ObjectModel) -> Self {
        Self {
            tag: Tag::default(),
            model,
            ignore_unknown_keys: false,
            finishing: Finishing::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Silently ignore input keys that are not declared in the model,
    /// instead of failing the call.
    #[must_use]
    pub const fn ignore_unknown_keys(mut self, ignore: bool) -> Self {
        self.ignore_unknown_keys = ignore;
        self
    }

    /// Append a filter over the whole parsed object.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = Object> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator over the whole parsed object.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = Object> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured model.
    pub const fn model(&self) -> &ObjectModel {
        &self.model
    }

    /// Whether unknown input keys are ignored.
    pub const fn ignores_unknown_keys(&self) -> bool {
        self.ignore_unknown_keys
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<Object>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<Object>] {
        self.finishing.validators()
    }

    /// Convert a pair-sequence input into a mapping. Duplicate textual
    /// keys take the last pair, as in any iterator-to-map collection.
    fn pairs_to_object(&self, pairs: &[Value]) -> ParseResult<Object> {
        let mut object = Object::with_capacity(pairs.len());
        for pair in pairs {
            let Some([raw_key, raw_value]) = pair.as_array() else {
                return Err(ParseError::not_convertible(
                    &self.tag,
                    "every entry must be a two-element [key, value] pair",
                    pair,
                ));
            };
            let Some(key) = raw_key.as_text() else {
                return Err(ParseError::not_convertible(
                    &self.tag,
                    "pair keys must be text",
                    raw_key,
                ));
            };
            object.insert(key, raw_value.clone());
        }
        Ok(object)
    }

    fn parse_fields(&self, input: &Value) -> ParseResult<Object> {
        let converted;
        let mapping: &Object = match input {
            Value::Object(o) => o,
            Value::Array(pairs) => {
                converted = self.pairs_to_object(pairs)?;
                &converted
            }
            _ => {
                return Err(ParseError::not_convertible(
                    &self.tag,
                    "not convertible to a mapping",
                    input,
                ));
            }
        };

        if !self.ignore_unknown_keys {
            for key in mapping.keys() {
                if !self.model.contains(key) {
                    tracing::trace!(tag = %self.tag, key, "rejecting unknown input key");
                    return Err(ParseError::invalid_input(
                        &self.tag,
                        format!("unknown key {key:?}"),
                        input,
                    ));
                }
            }
        }

        let mut result = Object::with_capacity(self.model.len());
        for field in self.model.fields() {
            match mapping.get(field.name()) {
                Some(raw) => {
                    let parsed = field.blueprint().apply(raw)?;
                    result.insert(field.name(), parsed);
                }
                None => match field.default() {
                    Some(default) => {
                        result.insert(field.name(), default.clone());
                    }
                    None => {
                        return Err(ParseError::invalid_input(
                            &self.tag,
                            format!("missing required key {:?}", field.name()),
                            input,
                        ));
                    }
                },
            }
        }
        Ok(result)
    }
}

impl Blueprint for ObjectBlueprint {
    type Output = Object;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Object> {
        let fields = self.parse_fields(input)?;
        self.finishing.apply(fields)
    }
}

/// Creates an object blueprint over `model`.
#[must_use]
pub fn object(model: ObjectModel) -> ObjectBlueprint {
    ObjectBlueprint::new(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprints::{integer, text};
    use crate::foundation::BlueprintExt;
    use crate::model::ObjectModel;

    fn schema() -> ObjectModel {
        ObjectModel::builder()
            .field("a", integer().boxed())
            .field("b", text().boxed())
            .build()
            .unwrap()
    }

    fn raw(entries: &[(&str, Value)]) -> Value {
        Value::object(entries.iter().map(|(k, v)| ((*k).to_string(), v.clone())))
    }

    #[test]
    fn parses_declared_fields_in_order() {
        let bp = object(schema());
        let parsed = bp
            .apply(&raw(&[
                ("b", Value::text("x")),
                ("a", Value::text("1")),
            ]))
            .unwrap();
        let keys: Vec<_> = parsed.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(parsed.get("a"), Some(&Value::integer(1)));
        assert_eq!(parsed.get("b"), Some(&Value::text("x")));
    }

    #[test]
    fn unknown_key_fails_by_default() {
        let bp = object(schema());
        let input = raw(&[
            ("a", Value::integer(1)),
            ("b", Value::text("x")),
            ("c", Value::text("extra")),
        ]);
        let err = bp.apply(&input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput { .. }));
    }

    #[test]
    fn unknown_key_ignored_on_request() {
        let bp = object(schema()).ignore_unknown_keys(true);
        let input = raw(&[
            ("a", Value::integer(1)),
            ("b", Value::text("x")),
            ("c", Value::text("extra")),
        ]);
        let parsed = bp.apply(&input).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(!parsed.contains_key("c"));
    }

    #[test]
    fn missing_required_key_fails() {
        let bp = object(schema());
        let err = bp.apply(&raw(&[("a", Value::integer(1))])).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput { .. }));
    }

    #[test]
    fn keys_match_exactly_not_trimmed() {
        let bp = object(schema());
        let input = raw(&[("a ", Value::integer(1)), ("b", Value::text("x"))]);
        // "a " is an unknown key AND "a" is missing; either way the
        // call must fail.
        assert!(bp.apply(&input).is_err());
    }

    #[test]
    fn accepts_pair_sequences() {
        let bp = object(schema());
        let input = Value::array([
            Value::array([Value::text("a"), Value::text("2")]),
            Value::array([Value::text("b"), Value::text("y")]),
            // Later pair wins, mapping-conversion style.
            Value::array([Value::text("b"), Value::text("z")]),
        ]);
        let parsed = bp.apply(&input).unwrap();
        assert_eq!(parsed.get("a"), Some(&Value::integer(2)));
        assert_eq!(parsed.get("b"), Some(&Value::text("z")));
    }

    #[test]
    fn non_mapping_input_is_not_convertible() {
        let bp = object(schema());
        assert!(matches!(
            bp.apply(&Value::integer(5)).unwrap_err(),
            ParseError::NotConvertible { .. }
        ));
        assert!(matches!(
            bp.apply(&Value::array([Value::integer(1)])).unwrap_err(),
            ParseError::NotConvertible { .. }
        ));
    }

    #[test]
    fn child_failure_propagates_unchanged() {
        let bp = object(
            ObjectModel::builder()
                .field("port", integer().with_tag("port").boxed())
                .build()
                .unwrap(),
        );
        let err = bp.apply(&raw(&[("port", Value::text("eighty"))])).unwrap_err();
        assert!(matches!(err, ParseError::NotConvertible { .. }));
        assert_eq!(err.tag().as_str(), "port");
    }
}
