//! Collection size validators.

use std::marker::PhantomData;

use crate::foundation::{ParseError, ParseResult, Tag, Validator};

/// Rejects vectors with fewer than a minimum number of items.
#[derive(Debug, Clone)]
pub struct MinItems<T> {
    tag: Tag,
    min: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> MinItems<T> {
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            tag: Tag::default(),
            min,
            _phantom: PhantomData,
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl<T> Validator for MinItems<T> {
    type Data = Vec<T>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn validate(&self, value: &Vec<T>) -> ParseResult<()> {
        if value.len() >= self.min {
            Ok(())
        } else {
            Err(ParseError::validation_failed(
                &self.tag,
                format!("must have at least {} items, got {}", self.min, value.len()),
            ))
        }
    }
}

/// Creates a validator that requires at least `min` items.
#[must_use]
pub fn min_items<T>(min: usize) -> MinItems<T> {
    MinItems::new(min)
}

/// Rejects vectors with more than a maximum number of items.
#[derive(Debug, Clone)]
pub struct MaxItems<T> {
    tag: Tag,
    max: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> MaxItems<T> {
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            tag: Tag::default(),
            max,
            _phantom: PhantomData,
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl<T> Validator for MaxItems<T> {
    type Data = Vec<T>;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn validate(&self, value: &Vec<T>) -> ParseResult<()> {
        if value.len() <= self.max {
            Ok(())
        } else {
            Err(ParseError::validation_failed(
                &self.tag,
                format!("must have at most {} items, got {}", self.max, value.len()),
            ))
        }
    }
}

/// Creates a validator that allows at most `max` items.
#[must_use]
pub fn max_items<T>(max: usize) -> MaxItems<T> {
    MaxItems::new(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_items_rejects_short_vectors() {
        let validator = min_items::<i64>(2);
        assert!(validator.validate(&vec![1, 2]).is_ok());
        assert!(validator.validate(&vec![1]).is_err());
    }

    #[test]
    fn max_items_rejects_long_vectors() {
        let validator = max_items::<i64>(2);
        assert!(validator.validate(&vec![1, 2]).is_ok());
        assert!(validator.validate(&vec![1, 2, 3]).is_err());
    }
}
