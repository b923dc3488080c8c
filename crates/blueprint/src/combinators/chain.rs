//! Chaining blueprint.

use std::fmt;

use forma_value::Value;

use crate::foundation::{
    Blueprint, BoxedBlueprint, ConfigError, ConfigResult, ParseError, ParseResult, Tag,
};

/// Runs an ordered, non-empty sequence of blueprints, feeding the
/// output of stage *i* verbatim as the input of stage *i + 1*.
///
/// The chain itself adds nothing: any stage's failure propagates
/// unchanged, and the last stage's output is the result.
///
/// # Examples
///
/// ```rust,ignore
/// use forma_blueprint::prelude::*;
///
/// // Render the raw value as text, then re-parse it as an integer.
/// let chain = ChainBlueprint::new(vec![
///     text().boxed(),
///     integer().boxed(),
/// ])?;
/// ```
pub struct ChainBlueprint {
    tag: Tag,
    stages: Vec<BoxedBlueprint>,
}

impl fmt::Debug for ChainBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBlueprint")
            .field("tag", &self.tag)
            .field(
                "stages",
                &self.stages.iter().map(|stage| stage.tag()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ChainBlueprint {
    /// A chain over `stages`. Zero stages is a configuration error.
    pub fn new(stages: Vec<BoxedBlueprint>) -> ConfigResult<Self> {
        if stages.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(Self {
            tag: Tag::default(),
            stages,
        })
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The stages, in application order.
    pub fn stages(&self) -> &[BoxedBlueprint] {
        &self.stages
    }
}

impl Blueprint for ChainBlueprint {
    type Output = Value;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn parse(&self, input: &Value) -> ParseResult<Value> {
        let (first, rest) = self
            .stages
            .split_first()
            .ok_or_else(|| ParseError::unexpected(&self.tag, "empty chain"))?;
        let mut current = first.apply(input)?;
        for stage in rest {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }
}

/// Creates a chain blueprint over `stages`.
pub fn chain(stages: Vec<BoxedBlueprint>) -> ConfigResult<ChainBlueprint> {
    ChainBlueprint::new(stages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprints::{integer, text};
    use crate::foundation::BlueprintExt;

    #[test]
    fn feeds_each_stage_the_previous_output() {
        // Text first renders the number, integer then re-parses it.
        let bp = chain(vec![text().boxed(), integer().boxed()]).unwrap();
        assert_eq!(bp.apply(&Value::integer(42)).unwrap(), Value::integer(42));
        assert_eq!(bp.apply(&Value::text(" 7")).unwrap(), Value::integer(7));
    }

    #[test]
    fn single_stage_chain_is_transparent() {
        let bp = chain(vec![integer().boxed()]).unwrap();
        assert_eq!(bp.apply(&Value::text("5")).unwrap(), Value::integer(5));
    }

    #[test]
    fn stage_failure_propagates_unchanged() {
        let bp = chain(vec![text().boxed(), integer().with_tag("second").boxed()]).unwrap();
        let err = bp.apply(&Value::text("not a number")).unwrap_err();
        assert_eq!(err.tag().as_str(), "second");
    }

    #[test]
    fn empty_chain_is_a_config_error() {
        assert!(matches!(chain(Vec::new()), Err(ConfigError::EmptyChain)));
    }
}
