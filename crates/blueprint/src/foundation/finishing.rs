//! The filter + validator chain every value-producing blueprint embeds.

use std::fmt;

use smallvec::SmallVec;

use crate::foundation::{BoxedFilter, BoxedValidator, ParseResult, guard};

/// An ordered filter chain and an ordered validator chain.
///
/// After a blueprint has parsed its input, the result is threaded
/// through the filters in declared order (each receiving the previous
/// filter's output), then inspected by the validators in declared
/// order, stopping at the first rejection. Each filter and validator
/// runs behind the panic safety net under its own tag.
///
/// Most chains hold zero, one, or two entries; storage is
/// smallvec-backed to keep those cases allocation-free.
pub struct Finishing<T> {
    filters: SmallVec<[BoxedFilter<T>; 2]>,
    validators: SmallVec<[BoxedValidator<T>; 2]>,
}

impl<T> Finishing<T> {
    /// An empty chain pair.
    pub fn new() -> Self {
        Self {
            filters: SmallVec::new(),
            validators: SmallVec::new(),
        }
    }

    /// Append a filter.
    pub fn push_filter(&mut self, filter: BoxedFilter<T>) {
        self.filters.push(filter);
    }

    /// Append a validator.
    pub fn push_validator(&mut self, validator: BoxedValidator<T>) {
        self.validators.push(validator);
    }

    /// The configured filter chain, in application order.
    pub fn filters(&self) -> &[BoxedFilter<T>] {
        &self.filters
    }

    /// The configured validator chain, in application order.
    pub fn validators(&self) -> &[BoxedValidator<T>] {
        &self.validators
    }

    /// Check whether both chains are empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.validators.is_empty()
    }

    /// Thread `value` through the filter chain, then the validator
    /// chain.
    pub fn apply(&self, value: T) -> ParseResult<T> {
        let mut value = value;
        for filter in &self.filters {
            value = guard::shielded(filter.tag(), move || Ok(filter.filter(value)))?;
        }
        for validator in &self.validators {
            guard::shielded(validator.tag(), || validator.validate(&value))?;
        }
        Ok(value)
    }
}

impl<T> Default for Finishing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Finishing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finishing")
            .field("filters", &self.filters.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}
