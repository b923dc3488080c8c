//! Built-in validators.
//!
//! All validators are pure predicates over already-parsed data: they
//! inspect, never mutate, and reject with
//! [`ParseError::ValidationFailed`](crate::foundation::ParseError::ValidationFailed).

mod collection;
mod membership;
mod numeric;
mod string;

pub use collection::{MaxItems, MinItems, max_items, min_items};
pub use membership::{Allowlist, Blocklist, allowlist, blocklist};
pub use numeric::{Between, Maximum, Minimum, between, maximum, minimum};
pub use string::{
    Matches, MaxLength, MinLength, NotBlank, matches, max_length, min_length, not_blank,
};
