//! Foundation layer: tags, modes, the failure taxonomy, the core
//! component contracts, and the shared chain/safety-net machinery.

mod error;
mod finishing;
pub(crate) mod guard;
mod mode;
mod tag;
mod traits;

pub use error::{ConfigError, ConfigResult, ParseError, ParseResult};
pub use finishing::Finishing;
pub use mode::ParsingMode;
pub use tag::Tag;
pub use traits::{
    Blueprint, BlueprintExt, BoxedBlueprint, BoxedFilter, BoxedValidator, Erase, Filter, Validator,
};
