//! Core contracts for blueprints, filters, and validators.
//!
//! A [`Blueprint`] converts one untrusted [`Value`] into one typed,
//! validated output. A [`Filter`] is a same-type transform over already
//! parsed data; a [`Validator`] is a pure predicate over it. All three
//! carry a diagnostic [`Tag`] and are immutable once constructed.

use forma_value::Value;

use crate::combinators::{Fallback, Noneable};
use crate::foundation::{ParseResult, Tag, guard};

// ============================================================================
// BLUEPRINT
// ============================================================================

/// The central abstraction: parse an untrusted value into `Output`.
///
/// `parse` holds the core logic — mode-gated conversion for leaves,
/// recursion into children for composites, then the instance's filter
/// and validator chains. Callers go through [`apply`](Blueprint::apply),
/// which runs `parse` behind the panic safety net so a fault in
/// user-supplied component code surfaces as
/// [`ParseError::Unexpected`](crate::foundation::ParseError::Unexpected)
/// instead of unwinding through the application.
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// let bp = integer().with_tag("retries").with_validator(minimum(0));
/// assert_eq!(bp.apply(&Value::text("3")).unwrap(), 3);
/// ```
pub trait Blueprint {
    /// The parsed, validated output type.
    type Output;

    /// The diagnostic tag of this instance.
    fn tag(&self) -> &Tag;

    /// Core parsing logic, without the safety net.
    fn parse(&self, input: &Value) -> ParseResult<Self::Output>;

    /// Public entry point: [`parse`](Blueprint::parse) behind the panic
    /// safety net.
    fn apply(&self, input: &Value) -> ParseResult<Self::Output> {
        guard::shielded(self.tag(), || self.parse(input))
    }
}

impl<B: Blueprint + ?Sized> Blueprint for Box<B> {
    type Output = B::Output;

    fn tag(&self) -> &Tag {
        (**self).tag()
    }

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }

    fn apply(&self, input: &Value) -> ParseResult<Self::Output> {
        (**self).apply(input)
    }
}

/// A type-erased blueprint producing a dynamic [`Value`], the currency
/// of heterogeneous composition (object fields, chain stages).
pub type BoxedBlueprint = Box<dyn Blueprint<Output = Value> + Send + Sync>;

// ============================================================================
// FILTER
// ============================================================================

/// A single-responsibility transform applied to already-parsed data.
///
/// Input and output are the same type by construction, so a filter
/// cannot change the runtime type of the value it touches. Any
/// configuration (bounds, tables) is validated eagerly by the filter's
/// constructor.
pub trait Filter {
    /// The type this filter transforms.
    type Data;

    /// The diagnostic tag of this instance.
    fn tag(&self) -> &Tag;

    /// Transform the value.
    fn filter(&self, value: Self::Data) -> Self::Data;
}

/// A type-erased filter.
pub type BoxedFilter<T> = Box<dyn Filter<Data = T> + Send + Sync>;

// ============================================================================
// VALIDATOR
// ============================================================================

/// A single-responsibility predicate over parsed data.
///
/// Validators only inspect: they either pass, or reject with
/// [`ParseError::ValidationFailed`](crate::foundation::ParseError::ValidationFailed).
pub trait Validator {
    /// The type this validator inspects.
    type Data;

    /// The diagnostic tag of this instance.
    fn tag(&self) -> &Tag;

    /// Inspect the value.
    fn validate(&self, value: &Self::Data) -> ParseResult<()>;
}

/// A type-erased validator.
pub type BoxedValidator<T> = Box<dyn Validator<Data = T> + Send + Sync>;

// ============================================================================
// BLUEPRINT EXTENSION TRAIT
// ============================================================================

/// Boxing adapter behind [`BlueprintExt::boxed`]: forwards to the inner
/// blueprint and lifts its typed output into a [`Value`].
#[derive(Debug, Clone)]
pub struct Erase<B> {
    inner: B,
}

impl<B> Blueprint for Erase<B>
where
    B: Blueprint,
    B::Output: Into<Value>,
{
    type Output = Value;

    fn tag(&self) -> &Tag {
        self.inner.tag()
    }

    fn parse(&self, input: &Value) -> ParseResult<Value> {
        self.inner.apply(input).map(Into::into)
    }
}

/// Extension trait providing decorator shortcuts for blueprints.
///
/// Automatically implemented for every [`Blueprint`].
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// let bp = integer().noneable();            // Null passes through as None
/// let bp = integer().or_default(0);         // recoverable failures become 0
/// let field = integer().boxed();            // ready for an object model
/// ```
pub trait BlueprintExt: Blueprint + Sized {
    /// Erase the output type for heterogeneous composition.
    fn boxed(self) -> BoxedBlueprint
    where
        Self: Send + Sync + 'static,
        Self::Output: Into<Value>,
    {
        Box::new(Erase { inner: self })
    }

    /// Pass null input through as `None` instead of delegating.
    fn noneable(self) -> Noneable<Self> {
        Noneable::new(self)
    }

    /// Replace null input with a fixed default instead of delegating.
    fn noneable_or(self, default: Self::Output) -> Noneable<Self> {
        Noneable::with_default(self, default)
    }

    /// Swallow recoverable failures and return a fixed default instead.
    fn or_default(self, default: Self::Output) -> Fallback<Self> {
        Fallback::new(self, default)
    }
}

impl<B: Blueprint> BlueprintExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ParseError;

    // Minimal blueprint used to exercise the trait plumbing.
    struct RawBoolean {
        tag: Tag,
    }

    impl Blueprint for RawBoolean {
        type Output = bool;

        fn tag(&self) -> &Tag {
            &self.tag
        }

        fn parse(&self, input: &Value) -> ParseResult<bool> {
            input
                .as_boolean()
                .ok_or_else(|| ParseError::type_not_allowed(&self.tag, "boolean", input))
        }
    }

    #[test]
    fn apply_delegates_to_parse() {
        let bp = RawBoolean {
            tag: Tag::from("flag"),
        };
        assert!(bp.apply(&Value::boolean(true)).unwrap());
        assert!(bp.apply(&Value::integer(1)).is_err());
    }

    #[test]
    fn boxed_blueprint_produces_values() {
        let bp: BoxedBlueprint = RawBoolean {
            tag: Tag::from("flag"),
        }
        .boxed();
        assert_eq!(bp.apply(&Value::boolean(true)).unwrap(), Value::boolean(true));
        assert_eq!(bp.tag().as_str(), "flag");
    }
}
