//! The last-resort panic safety net.
//!
//! Anything a component's core logic can raise on purpose travels as a
//! [`ParseError`]. A panic — in user-supplied filter, validator, or
//! blueprint code — is the one fault domain left, and it is converted
//! here into [`ParseError::Unexpected`], tagged with the component it
//! escaped from and carrying the panic payload text. This is a safety
//! net, not a substitute for explicit error handling.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::foundation::{ParseError, ParseResult, Tag};

/// Run `op`, converting a panic into [`ParseError::Unexpected`].
pub fn shielded<T>(tag: &Tag, op: impl FnOnce() -> ParseResult<T>) -> ParseResult<T> {
    match catch_unwind(AssertUnwindSafe(op)) {
        Ok(result) => result,
        Err(payload) => Err(ParseError::unexpected(tag, payload_text(payload.as_ref()))),
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
