//! Built-in filters.
//!
//! Filters are same-type transforms over already-parsed data. Their
//! configuration is validated eagerly at construction; an invalid
//! configuration is a [`ConfigError`](crate::foundation::ConfigError),
//! never a parse-time failure.

mod numeric;
mod string;

pub use numeric::{Clamp, FiniteBound, clamp};
pub use string::{Lowercase, Replace, Strip, Uppercase, lowercase, replace, strip, uppercase};
