//! Leaf blueprints: primitive conversions under the shared three-mode
//! strictness policy.
//!
//! Every leaf selects one of three parse routines at construction —
//! strict, rational, or loose — and threads its parsed value through
//! its filter chain and then its validator chain. Acceptance is
//! monotone across modes, and an input two modes both accept parses to
//! the identical output in both.

mod boolean;
mod datetime;
mod float;
mod integer;
mod ip;
mod text;

pub use boolean::{BooleanBlueprint, boolean};
pub use datetime::{DateTimeBlueprint, datetime};
pub use float::{FloatBlueprint, float};
pub use integer::{IntegerBlueprint, integer};
pub use ip::{IpAddressBlueprint, ip_address};
pub use text::{TextBlueprint, text};
