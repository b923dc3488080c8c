//! Composite blueprints: structure-aware blueprints assembled from
//! child blueprints.
//!
//! Composition preserves the failure contract end to end: child
//! failures propagate unmodified (original kind, tag, offending value),
//! and a composite either returns a fully-populated result or fails
//! with one error — no partial result is ever observable.

mod chain;
mod dictionary;
mod fallback;
mod json;
mod list;
mod noneable;
mod object;
mod predefined;

pub use chain::{ChainBlueprint, chain};
pub use dictionary::{DictionaryBlueprint, dictionary};
pub use fallback::Fallback;
pub use json::{JsonBlueprint, json};
pub use list::{ListBlueprint, list};
pub use noneable::Noneable;
pub use object::{ObjectBlueprint, object};
pub use predefined::{
    FloatKey, MapKey, PredefinedDictionaryBlueprint, PredefinedDictionaryBuilder,
};
