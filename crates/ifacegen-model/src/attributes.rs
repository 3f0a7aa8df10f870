//! Structural flags of an interface.

use crate::error::SchemaError;
use crate::model::{ConstructorDefinition, InterfaceModel, Visibility};

/// The parameterless constructor with every field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConstructor {
    pub definition: ConstructorDefinition,
    pub visibility: Visibility,
}

impl ResolvedConstructor {
    pub fn is_deleted(&self) -> bool {
        self.definition == ConstructorDefinition::Deleted
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

impl InterfaceModel {
    /// Whether the class is static (never instantiated).
    pub fn resolve_static(&self) -> Result<bool, SchemaError> {
        self.is_static.ok_or(SchemaError::MissingField("static"))
    }

    /// Whether instances can be copied. Absent means not copyable.
    pub fn resolve_copyable(&self) -> bool {
        self.copyable.unwrap_or(false)
    }

    pub fn resolve_parameterless_constructor(&self) -> Result<ResolvedConstructor, SchemaError> {
        let spec = self
            .parameterless_constructor
            .ok_or(SchemaError::MissingField("parameterlessConstructor"))?;
        Ok(ResolvedConstructor {
            definition: spec
                .definition
                .ok_or(SchemaError::MissingField("parameterlessConstructor.definition"))?,
            visibility: spec
                .visibility
                .ok_or(SchemaError::MissingField("parameterlessConstructor.visibility"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConstructorSpec;

    #[test]
    fn resolves_present_fields() {
        let model = InterfaceModel::new("Foo")
            .with_static(true)
            .with_copyable(true)
            .with_constructor(ConstructorDefinition::Deleted, Visibility::Private);

        assert_eq!(model.resolve_static(), Ok(true));
        assert!(model.resolve_copyable());

        let ctor = model.resolve_parameterless_constructor().unwrap();
        assert!(ctor.is_deleted());
        assert!(!ctor.is_public());
    }

    #[test]
    fn absent_fields() {
        let mut model = InterfaceModel::new("Foo");
        assert_eq!(model.resolve_static(), Err(SchemaError::MissingField("static")));
        assert!(!model.resolve_copyable());

        model.parameterless_constructor = Some(ConstructorSpec {
            definition: Some(ConstructorDefinition::Default),
            visibility: None,
        });
        assert_eq!(
            model.resolve_parameterless_constructor(),
            Err(SchemaError::MissingField("parameterlessConstructor.visibility"))
        );
    }
}
