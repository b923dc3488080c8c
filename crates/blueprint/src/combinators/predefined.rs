//! Predefined-dictionary blueprint: a fixed schema keyed by arbitrary
//! hashable keys instead of field names.

use std::collections::HashMap;
use std::fmt;

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedBlueprint, BoxedFilter, BoxedValidator, ConfigError, ConfigResult, Filter,
    Finishing, ParseError, ParseResult, Tag, Validator,
};

/// A float usable as a map key: equality and hashing run over the
/// canonicalized bit pattern (NaN is one value, -0.0 equals 0.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatKey(u64);

impl FloatKey {
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(f64::NAN.to_bits())
        } else if value == 0.0 {
            Self(0.0_f64.to_bits())
        } else {
            Self(value.to_bits())
        }
    }

    /// The float this key was built from.
    #[must_use]
    pub const fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// A hashable dictionary key: boolean, integer, float, or text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    Boolean(bool),
    Integer(i64),
    Float(FloatKey),
    Text(String),
}

impl MapKey {
    /// Read a key out of a raw value. Collections, nulls, and the other
    /// unhashable shapes are rejected.
    pub fn from_value(input: &Value, tag: &Tag) -> ParseResult<Self> {
        match input {
            Value::Boolean(b) => Ok(Self::Boolean(*b)),
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Float(f) => Ok(Self::Float(FloatKey::new(*f))),
            Value::Text(s) => Ok(Self::Text(s.clone())),
            _ => Err(ParseError::not_convertible(
                tag,
                "not usable as a dictionary key",
                input,
            )),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{}", v.value()),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for MapKey {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for MapKey {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for MapKey {
    fn from(v: f64) -> Self {
        Self::Float(FloatKey::new(v))
    }
}

impl From<&str> for MapKey {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for MapKey {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

struct KeySpec {
    key: MapKey,
    blueprint: BoxedBlueprint,
    default: Option<Value>,
}

impl fmt::Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySpec")
            .field("key", &self.key)
            .field("blueprint", &self.blueprint.tag())
            .field("default", &self.default)
            .finish()
    }
}

/// Parses a mapping against a fixed set of known keys, producing a
/// plain `HashMap<MapKey, Value>`.
///
/// The matching and policy rules are those of
/// [`ObjectBlueprint`](crate::combinators::ObjectBlueprint) — unknown
/// keys rejected unless ignored, per-key optional defaults substituted
/// without invoking the child — but keys are arbitrary hashable values
/// rather than field names. Non-text keys can only arrive through
/// pair-array input, since object keys are textual.
#[derive(Debug)]
pub struct PredefinedDictionaryBlueprint {
    tag: Tag,
    entries: Vec<KeySpec>,
    ignore_unknown_keys: bool,
    finishing: Finishing<HashMap<MapKey, Value>>,
}

impl PredefinedDictionaryBlueprint {
    /// Start declaring the key schema.
    #[must_use]
    pub fn builder() -> PredefinedDictionaryBuilder {
        PredefinedDictionaryBuilder {
            entries: Vec::new(),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Silently ignore input keys that are not declared, instead of
    /// failing the call.
    #[must_use]
    pub const fn ignore_unknown_keys(mut self, ignore: bool) -> Self {
        self.ignore_unknown_keys = ignore;
        self
    }

    /// Append a filter over the whole parsed map.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: impl Filter<Data = HashMap<MapKey, Value>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_filter(Box::new(filter));
        self
    }

    /// Append a validator over the whole parsed map.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Validator<Data = HashMap<MapKey, Value>> + Send + Sync + 'static,
    ) -> Self {
        self.finishing.push_validator(Box::new(validator));
        self
    }

    /// The declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &MapKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Whether unknown input keys are ignored.
    pub const fn ignores_unknown_keys(&self) -> bool {
        self.ignore_unknown_keys
    }

    /// The configured filter chain.
    pub fn filters(&self) -> &[BoxedFilter<HashMap<MapKey, Value>>] {
        self.finishing.filters()
    }

    /// The configured validator chain.
    pub fn validators(&self) -> &[BoxedValidator<HashMap<MapKey, Value>>] {
        self.finishing.validators()
    }

    /// Flatten the input into key → raw-value entries. Duplicate keys
    /// take the last occurrence, mapping-conversion style.
    fn collect_entries(&self, input: &Value) -> ParseResult<Vec<(MapKey, Value)>> {
        let mut entries: Vec<(MapKey, Value)> = Vec::new();
        let mut push = |key: MapKey, value: Value| {
            if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                entries.push((key, value));
            }
        };
        match input {
            Value::Object(o) => {
                for (key, value) in o.iter() {
                    push(MapKey::Text(key.to_string()), value.clone());
                }
            }
            Value::Array(pairs) => {
                for pair in pairs {
                    let Some([raw_key, raw_value]) = pair.as_array() else {
                        return Err(ParseError::not_convertible(
                            &self.tag,
                            "every entry must be a two-element [key, value] pair",
                            pair,
                        ));
                    };
                    push(MapKey::from_value(raw_key, &self.tag)?, raw_value.clone());
                }
            }
            _ => {
                return Err(ParseError::not_convertible(
                    &self.tag,
                    "not convertible to a mapping",
                    input,
                ));
            }
        }
        Ok(entries)
    }

    fn parse_keys(&self, input: &Value) -> ParseResult<HashMap<MapKey, Value>> {
        let entries = self.collect_entries(input)?;

        if !self.ignore_unknown_keys {
            for (key, _) in &entries {
                if !self.entries.iter().any(|spec| spec.key == *key) {
                    return Err(ParseError::invalid_input(
                        &self.tag,
                        format!("unknown key {key}"),
                        input,
                    ));
                }
            }
        }

        let mut result = HashMap::with_capacity(self.entries.len());
        for spec in &self.entries {
            match entries.iter().find(|(key, _)| *key == spec.key) {
                Some((_, raw)) => {
                    let parsed = spec.blueprint.apply(raw)?;
                    result.insert(spec.key.clone(), parsed);
                }
                None => match &spec.default {
                    Some(default) => {
                        result.insert(spec.key.clone(), default.clone());
                    }
                    None => {
                        return Err(ParseError::invalid_input(
                            &self.tag,
                            format!("missing required key {}", spec.key),
                            input,
                        ));
                    }
                },
            }
        }
        Ok(result)
    }
}

impl Blueprint for PredefinedDictionaryBlueprint {
    type Output = HashMap<MapKey, Value>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        let parsed = self.parse_keys(input)?;
        self.finishing.apply(parsed)
    }
}

/// Builder for [`PredefinedDictionaryBlueprint`].
#[derive(Debug)]
pub struct PredefinedDictionaryBuilder {
    entries: Vec<KeySpec>,
}

impl PredefinedDictionaryBuilder {
    /// Declare a required key.
    #[must_use]
    pub fn key(mut self, key: impl Into<MapKey>, blueprint: BoxedBlueprint) -> Self {
        self.entries.push(KeySpec {
            key: key.into(),
            blueprint,
            default: None,
        });
        self
    }

    /// Declare an optional key with the default substituted when it is
    /// absent from input. The blueprint is not invoked for the default.
    #[must_use]
    pub fn optional_key(
        mut self,
        key: impl Into<MapKey>,
        blueprint: BoxedBlueprint,
        default: impl Into<Value>,
    ) -> Self {
        self.entries.push(KeySpec {
            key: key.into(),
            blueprint,
            default: Some(default.into()),
        });
        self
    }

    /// Finish the declaration. The schema must declare at least one
    /// key, each exactly once.
    pub fn build(self) -> ConfigResult<PredefinedDictionaryBlueprint> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptySchema);
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(ConfigError::DuplicateKey {
                    key: entry.key.to_string(),
                });
            }
        }
        Ok(PredefinedDictionaryBlueprint {
            tag: Tag::default(),
            entries: self.entries,
            ignore_unknown_keys: false,
            finishing: Finishing::new(),
        })
    }
}
