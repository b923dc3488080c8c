//! Prelude module for convenient imports.
//!
//! Provides a single `use forma_blueprint::prelude::*;` import that
//! brings in the core traits, the value model, and every built-in
//! blueprint, combinator, filter, and validator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use forma_blueprint::prelude::*;
//!
//! let model = ObjectModel::builder()
//!     .field("host", text().with_validator(not_blank()).boxed())
//!     .optional_field("port", integer().boxed(), 8080)
//!     .build()?;
//! let config = json(object(model));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, modes
// ============================================================================

pub use crate::foundation::{
    Blueprint, BlueprintExt, BoxedBlueprint, BoxedFilter, BoxedValidator, ConfigError,
    ConfigResult, Filter, Finishing, ParseError, ParseResult, ParsingMode, Tag, Validator,
};

// ============================================================================
// VALUE MODEL
// ============================================================================

pub use forma_value::{Object, Value, ValueKind};

// ============================================================================
// LEAF BLUEPRINTS
// ============================================================================

pub use crate::blueprints::{
    BooleanBlueprint, DateTimeBlueprint, FloatBlueprint, IntegerBlueprint, IpAddressBlueprint,
    TextBlueprint, boolean, datetime, float, integer, ip_address, text,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{
    ChainBlueprint, DictionaryBlueprint, Fallback, FloatKey, JsonBlueprint, ListBlueprint, MapKey,
    Noneable, ObjectBlueprint, PredefinedDictionaryBlueprint, PredefinedDictionaryBuilder, chain,
    dictionary, json, list, object,
};

// ============================================================================
// OBJECT MODEL
// ============================================================================

pub use crate::model::{FieldSpec, ObjectModel, ObjectModelBuilder};

// ============================================================================
// FILTERS AND VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::filters::*;
#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;
