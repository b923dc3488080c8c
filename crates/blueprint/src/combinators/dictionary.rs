//! Dictionary-of-(key, value) blueprint.

use std::collections::HashMap;
use std::hash::Hash;

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedFilter, BoxedValidator, Filter, Finishing, ParseError, ParseResult,
    ParsingMode, Tag, Validator,
};

/// Parses a mapping by running every key through a key blueprint and
/// every value through a value blueprint, producing a fresh `HashMap`.
///
/// Object input feeds its (textual) keys to the key blueprint. Loose
/// parsing additionally accepts an array of two-element `[key, value]`
/// pairs, which is the only way non-text keys can arrive.
///
/// Fail-fast: the first failing key or value aborts the call with the
/// child's failure unchanged. Two input keys parsing to the same output
/// key (e.g. `"1"` and `"01"` through an integer key blueprint) are
/// rejected rather than silently collapsed.
#[derive(Debug)]
pub struct DictionaryBlueprint<KB, VB>
where
    KB: Blueprint,
    VB: Blueprint,
{
    tag: Tag,
    mode: ParsingMode,
    key: KB,
    value: VB,
    finishing: Finishing<HashMap<KB::Output, VB::Output>>,
}

impl<KB, VB> DictionaryBlueprint<KB, VB>
where
    KB: Blueprint,
    KB::Output: Eq + Hash,
    VB: Blueprint,
{
    /// A rational-mode dictionary over `key` and `value`.
    #[must_use]
    pub fn new(key: KB, value: VB) -> Self {
        Self::with_mode(key, value, ParsingMode::default())
    }

    /// A dictionary blueprint with an explicit mode.
    #[must_use]
    pub fn with_mode(key: KB, value: VB, mode: ParsingMode) -> Self {
        Self {
            tag: Tag::default(),
            mode,
            key,
            value,
            finishing: Finishing::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Append a filter over the whole parsed map.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = HashMap<KB::Output, VB::Output>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator over the whole parsed map.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = HashMap<KB::Output, VB::Output>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The configured parsing mode.
    pub const fn mode(&self) -> ParsingMode {
        self.mode
    }

    /// The child key blueprint.
    pub const fn key(&self) -> &KB {
        &self.key
    }

    /// The child value blueprint.
    pub const fn value(&self) -> &VB {
        &self.value
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<HashMap<KB::Output, VB::Output>>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<HashMap<KB::Output, VB::Output>>] {
        self.finishing.validators()
    }

    fn insert_entry(
        &self,
        map: &mut HashMap<KB::Output, VB::Output>,
        raw_key: &Value,
        raw_value: &Value,
    ) -> ParseResult<()> {
        let key = self.key.apply(raw_key)?;
        let value = self.value.apply(raw_value)?;
        if map.insert(key, value).is_some() {
            return Err(ParseError::invalid_input(
                &self.tag,
                format!("key {raw_key} collides with an earlier key after parsing"),
                raw_key,
            ));
        }
        Ok(())
    }

    fn parse_entries(&self, input: &Value) -> ParseResult<HashMap<KB::Output, VB::Output>> {
        match (self.mode, input) {
            (_, Value::Object(o)) => {
                let mut map = HashMap::with_capacity(o.len());
                for (raw_key, raw_value) in o.iter() {
                    self.insert_entry(&mut map, &Value::text(raw_key), raw_value)?;
                }
                Ok(map)
            }
            (ParsingMode::Loose, Value::Array(pairs)) => {
                let mut map = HashMap::with_capacity(pairs.len());
                for pair in pairs {
                    match pair.as_array() {
                        Some([raw_key, raw_value]) => {
                            self.insert_entry(&mut map, raw_key, raw_value)?;
                        }
                        _ => {
                            return Err(ParseError::invalid_input(
                                &self.tag,
                                "every entry must be a two-element [key, value] pair",
                                pair,
                            ));
                        }
                    }
                }
                Ok(map)
            }
            _ => Err(ParseError::type_not_allowed(&self.tag, "object", input)),
        }
    }
}

impl<KB, VB> Blueprint for DictionaryBlueprint<KB, VB>
where
    KB: Blueprint,
    KB::Output: Eq + Hash,
    VB: Blueprint,
{
    type Output = HashMap<KB::Output, VB::Output>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        let entries = self.parse_entries(input)?;
        self.finishing.apply(entries)
    }
}

/// Creates a rational-mode dictionary blueprint.
#[must_use]
pub fn dictionary<KB, VB>(key: KB, value: VB) -> DictionaryBlueprint<KB, VB>
where
    KB: Blueprint,
    KB::Output: Eq + Hash,
    VB: Blueprint,
{
    DictionaryBlueprint::new(key, value)
}
