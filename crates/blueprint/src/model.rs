//! Declarative field-name → blueprint schemas for object blueprints.
//!
//! An [`ObjectModel`] is an explicit, ordered list of field
//! declarations, assembled with a builder at configuration time:
//!
//! ```rust,ignore
//! use forma_blueprint::prelude::*;
//!
//! let model = ObjectModel::builder()
//!     .field("host", text().boxed())
//!     .field("port", integer().boxed())
//!     .optional_field("retries", integer().boxed(), 3)
//!     .build()?;
//! ```
//!
//! Declaration order is the order fields appear in parsed results. An
//! optional field's default is substituted when the input omits the
//! key, without invoking the field's blueprint.

use std::fmt;

use forma_value::Value;

use crate::foundation::{BoxedBlueprint, ConfigError, ConfigResult};

/// One declared field: a name, the blueprint that parses its value,
/// and — for optional fields — the default used when the key is absent.
pub struct FieldSpec {
    name: String,
    blueprint: BoxedBlueprint,
    default: Option<Value>,
}

impl FieldSpec {
    /// The declared field name. Input keys match it by exact equality.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The blueprint applied to the field's input value.
    pub fn blueprint(&self) -> &BoxedBlueprint {
        &self.blueprint
    }

    /// The default substituted when the key is absent, if the field is
    /// optional.
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Check whether the field may be absent from input.
    pub const fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("blueprint", &self.blueprint.tag())
            .field("default", &self.default)
            .finish()
    }
}

/// An ordered field-name → blueprint schema.
#[derive(Debug)]
pub struct ObjectModel {
    fields: Vec<FieldSpec>,
}

impl ObjectModel {
    /// Start declaring a model.
    #[must_use]
    pub fn builder() -> ObjectModelBuilder {
        ObjectModelBuilder { fields: Vec::new() }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A model is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check whether a field name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// Builder for [`ObjectModel`].
#[derive(Debug)]
pub struct ObjectModelBuilder {
    fields: Vec<FieldSpec>,
}

impl ObjectModelBuilder {
    /// Declare a required field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, blueprint: BoxedBlueprint) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            blueprint,
            default: None,
        });
        self
    }

    /// Declare an optional field with the default substituted when the
    /// key is absent from input. The blueprint is not invoked for the
    /// default.
    #[must_use]
    pub fn optional_field(
        mut self,
        name: impl Into<String>,
        blueprint: BoxedBlueprint,
        default: impl Into<Value>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            blueprint,
            default: Some(default.into()),
        });
        self
    }

    /// Finish the declaration. A model must declare at least one field,
    /// each exactly once.
    pub fn build(self) -> ConfigResult<ObjectModel> {
        if self.fields.is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(ObjectModel {
            fields: self.fields,
        })
    }
}
