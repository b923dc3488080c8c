//! # forma-blueprint
//!
//! A composable toolkit that converts untrusted, loosely-typed input
//! (decoded JSON, INI entries, HTTP form fields) into strongly-typed,
//! validated Rust values — or fails with one precisely-typed error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forma_blueprint::prelude::*;
//!
//! let port = integer().with_tag("port").with_validator(between(1, 65535));
//! assert_eq!(port.apply(&Value::text("8080")).unwrap(), 8080);
//! ```
//!
//! ## Building Blocks
//!
//! - **Blueprints** parse a [`Value`](forma_value::Value) into a typed
//!   output, then run it through an ordered filter chain and an ordered
//!   validator chain. Leaf blueprints ([`integer`](blueprints::integer),
//!   [`text`](blueprints::text), …) pick their acceptance rules from a
//!   [`ParsingMode`](foundation::ParsingMode) fixed at construction.
//! - **Combinators** assemble blueprints into lists, dictionaries,
//!   fixed-schema objects, chains, and JSON envelopes, propagating child
//!   failures unchanged and never committing partial results.
//! - **Filters** are same-type transforms; **validators** are pure
//!   predicates. Both are single-responsibility and eagerly validate
//!   their own configuration.
//!
//! Every component is immutable after construction and freely shareable
//! across threads.

// ParseError deliberately carries the offending input value for
// diagnostics — boxing it would add indirection to every parse call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (Noneable<Fallback<ListBlueprint<...>>>)
// produces complex types inherent to the type-safe architecture.
#![allow(clippy::type_complexity)]

pub mod blueprints;
pub mod combinators;
pub mod filters;
pub mod foundation;
mod macros;
pub mod model;
pub mod prelude;
pub mod validators;
