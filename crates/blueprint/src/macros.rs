//! Macros for declaring validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use forma_blueprint::validator;
//!
//! validator! {
//!     /// Rejects strings shorter than a minimum.
//!     pub MinLength { min: usize } for String;
//!     rule(self, value) { value.chars().count() >= self.min }
//!     message(self, value) {
//!         format!("must be at least {} characters", self.min)
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

/// Creates a complete validator: struct definition (with a diagnostic
/// tag), `Validator` implementation, constructor, `with_tag` builder,
/// and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MinLength { min: usize } for String;
///     rule(self, value) { value.chars().count() >= self.min }
///     message(self, value) { format!("must be at least {} characters", self.min) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic validator** (single type parameter, simple-identifier
/// bounds — import paths first):
/// ```rust,ignore
/// validator! {
///     pub Minimum<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, value) { *value >= self.min }
///     message(self, value) { format!("must be at least {}", self.min) }
///     fn minimum(min: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 0a: Unit validator (tag only) + factory fn ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $data;
            rule($self_, $inp) $rule
            message($self2, $minp) $msg
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Variant 0b: Unit validator (tag only), no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            tag: $crate::foundation::Tag,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Attach a diagnostic tag.
            #[must_use]
            pub fn with_tag(mut self, tag: impl Into<$crate::foundation::Tag>) -> Self {
                self.tag = tag.into();
                self
            }
        }

        impl $crate::foundation::Validator for $name {
            type Data = $data;

            fn tag(&self) -> &$crate::foundation::Tag {
                &self.tag
            }

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Data) -> $crate::foundation::ParseResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($crate::foundation::ParseError::validation_failed(
                        &$self_.tag,
                        $msg,
                    ))
                }
            }
        }
    };

    // ── Variant 1a: Struct with fields + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $data;
            rule($self_, $inp) $rule
            message($self2, $minp) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 1b: Struct with fields, no factory ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            tag: $crate::foundation::Tag,
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self {
                    tag: $crate::foundation::Tag::default(),
                    $($field),+
                }
            }

            /// Attach a diagnostic tag.
            #[must_use]
            pub fn with_tag(mut self, tag: impl Into<$crate::foundation::Tag>) -> Self {
                self.tag = tag.into();
                self
            }
        }

        impl $crate::foundation::Validator for $name {
            type Data = $data;

            fn tag(&self) -> &$crate::foundation::Tag {
                &self.tag
            }

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Data) -> $crate::foundation::ParseResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($crate::foundation::ParseError::validation_failed(
                        &$self_.tag,
                        $msg,
                    ))
                }
            }
        }
    };

    // ── Variant 2a: Generic struct + factory fn ──────────────────────────
    //
    // Supports a single generic type parameter with one or more trait
    // bounds. Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $data;
            rule($self_, $inp) $rule
            message($self2, $minp) $msg
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Generic struct, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $data:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            tag: $crate::foundation::Tag,
            $($field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self {
                    tag: $crate::foundation::Tag::default(),
                    $($field),+
                }
            }

            /// Attach a diagnostic tag.
            #[must_use]
            pub fn with_tag(mut self, tag: impl Into<$crate::foundation::Tag>) -> Self {
                self.tag = tag.into();
                self
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validator for $name<$gen> {
            type Data = $data;

            fn tag(&self) -> &$crate::foundation::Tag {
                &self.tag
            }

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Data) -> $crate::foundation::ParseResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($crate::foundation::ParseError::validation_failed(
                        &$self_.tag,
                        $msg,
                    ))
                }
            }
        }
    };
}
