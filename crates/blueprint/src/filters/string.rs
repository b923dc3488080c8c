//! String filters.

use crate::foundation::{ConfigError, ConfigResult, Filter, Tag};

/// Strips surrounding whitespace (or a configured character set).
///
/// Idempotent: stripping an already-stripped string is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Strip {
    tag: Tag,
    chars: Option<Vec<char>>,
}

impl Strip {
    /// Strip Unicode whitespace from both ends.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip the given characters from both ends instead of whitespace.
    #[must_use]
    pub fn of(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            tag: Tag::default(),
            chars: Some(chars.into_iter().collect()),
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl Filter for Strip {
    type Data = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn filter(&self, value: String) -> String {
        match &self.chars {
            None => value.trim().to_string(),
            Some(set) => value.trim_matches(|c| set.contains(&c)).to_string(),
        }
    }
}

/// Creates a whitespace-stripping filter.
#[must_use]
pub fn strip() -> Strip {
    Strip::new()
}

/// Lowercases the whole string.
#[derive(Debug, Clone, Default)]
pub struct Lowercase {
    tag: Tag,
}

impl Lowercase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl Filter for Lowercase {
    type Data = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn filter(&self, value: String) -> String {
        value.to_lowercase()
    }
}

/// Creates a lowercasing filter.
#[must_use]
pub fn lowercase() -> Lowercase {
    Lowercase::new()
}

/// Uppercases the whole string.
#[derive(Debug, Clone, Default)]
pub struct Uppercase {
    tag: Tag,
}

impl Uppercase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl Filter for Uppercase {
    type Data = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn filter(&self, value: String) -> String {
        value.to_uppercase()
    }
}

/// Creates an uppercasing filter.
#[must_use]
pub fn uppercase() -> Uppercase {
    Uppercase::new()
}

/// Applies an ordered table of substring replacements.
#[derive(Debug, Clone)]
pub struct Replace {
    tag: Tag,
    table: Vec<(String, String)>,
}

impl Replace {
    /// Build from an ordered `(from, to)` table. An empty table is a
    /// configuration error.
    pub fn new(table: Vec<(String, String)>) -> ConfigResult<Self> {
        if table.is_empty() {
            return Err(ConfigError::EmptyReplacementTable);
        }
        Ok(Self {
            tag: Tag::default(),
            table,
        })
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The replacement table, in application order.
    pub fn table(&self) -> &[(String, String)] {
        &self.table
    }
}

impl Filter for Replace {
    type Data = String;

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn filter(&self, value: String) -> String {
        self.table
            .iter()
            .fold(value, |acc, (from, to)| acc.replace(from.as_str(), to))
    }
}

/// Creates a replacement filter from an ordered table.
pub fn replace(table: Vec<(String, String)>) -> ConfigResult<Replace> {
    Replace::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_is_idempotent() {
        let filter = strip();
        let once = filter.filter("  padded \n".to_string());
        assert_eq!(once, "padded");
        assert_eq!(filter.filter(once.clone()), once);
    }

    #[test]
    fn strip_of_custom_characters() {
        let filter = Strip::of(['/', '.']);
        assert_eq!(filter.filter("/path/./".to_string()), "path");
    }

    #[test]
    fn case_filters() {
        assert_eq!(lowercase().filter("MiXeD".to_string()), "mixed");
        assert_eq!(uppercase().filter("MiXeD".to_string()), "MIXED");
    }

    #[test]
    fn replace_applies_in_order() {
        let filter = replace(vec![
            ("a".to_string(), "b".to_string()),
            ("bb".to_string(), "c".to_string()),
        ])
        .unwrap();
        assert_eq!(filter.filter("ab".to_string()), "c");
    }

    #[test]
    fn empty_table_is_a_config_error() {
        assert!(matches!(
            replace(Vec::new()),
            Err(ConfigError::EmptyReplacementTable)
        ));
    }
}
