//! JSON interface files to [`InterfaceModel`].
//!
//! Only the keys this crate understands are read; sibling emitters may keep
//! their own data in the same file, including `names` and `aliases` entries
//! for targets that have no [`Language`] or [`NameStyle`] tag here. No
//! defaults are filled in.

use crate::error::SchemaError;
use crate::model::{
    ConstructorDefinition, ConstructorSpec, InterfaceModel, Language, NameStyle, Visibility,
};
use serde_json::{Map, Value};

/// Parse an interface document held as text.
pub fn parse_interface_str(input: &str) -> Result<InterfaceModel, SchemaError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| SchemaError::malformed("<document>", e.to_string()))?;
    parse_interface(&value)
}

/// Parse an interface document.
pub fn parse_interface(input: &Value) -> Result<InterfaceModel, SchemaError> {
    let obj = input
        .as_object()
        .ok_or_else(|| SchemaError::malformed("<document>", "expected an object"))?;

    let mut model = InterfaceModel {
        name: get_str(obj, "name")?,
        is_static: get_bool(obj, "static")?,
        copyable: get_bool(obj, "copyable")?,
        ..InterfaceModel::default()
    };

    if let Some(ctor) = present(obj, "parameterlessConstructor") {
        model.parameterless_constructor = Some(parse_constructor(ctor)?);
    }

    if let Some(names) = present(obj, "names") {
        let names = names
            .as_object()
            .ok_or_else(|| SchemaError::malformed("names", "expected an object"))?;
        for (key, value) in names {
            let language = key.parse::<Language>().ok();
            let style = key.parse::<NameStyle>().ok();
            if language.is_none() && style.is_none() {
                continue;
            }
            let name = value
                .as_str()
                .ok_or_else(|| SchemaError::malformed(format!("names.{key}"), "expected a string"))?
                .to_string();
            if let Some(language) = language {
                model.lang_names.insert(language, name);
            } else if let Some(style) = style {
                model.style_names.insert(style, name);
            }
        }
    }

    if let Some(aliases) = present(obj, "aliases") {
        let aliases = aliases
            .as_object()
            .ok_or_else(|| SchemaError::malformed("aliases", "expected an object"))?;
        for (key, value) in aliases {
            let Ok(language) = key.parse::<Language>() else {
                continue;
            };
            let field = format!("aliases.{key}");
            let list = value
                .as_array()
                .ok_or_else(|| SchemaError::malformed(&field, "expected an array"))?
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(String::from)
                        .ok_or_else(|| SchemaError::malformed(&field, "expected an array of strings"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            model.aliases.insert(language, list);
        }
    }

    Ok(model)
}

fn parse_constructor(value: &Value) -> Result<ConstructorSpec, SchemaError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SchemaError::malformed("parameterlessConstructor", "expected an object"))?;

    let definition = match get_str(obj, "definition")?.as_deref() {
        None => None,
        Some("defined") => Some(ConstructorDefinition::Defined),
        Some("default") => Some(ConstructorDefinition::Default),
        Some("deleted") => Some(ConstructorDefinition::Deleted),
        Some(other) => {
            return Err(SchemaError::malformed(
                "parameterlessConstructor.definition",
                format!("unknown definition `{other}`"),
            ));
        }
    };

    let visibility = match get_str(obj, "visibility")?.as_deref() {
        None => None,
        Some("public") => Some(Visibility::Public),
        Some("protected") => Some(Visibility::Protected),
        Some("private") => Some(Visibility::Private),
        Some(other) => {
            return Err(SchemaError::malformed(
                "parameterlessConstructor.visibility",
                format!("unknown visibility `{other}`"),
            ));
        }
    };

    Ok(ConstructorSpec {
        definition,
        visibility,
    })
}

/// A key that is set to something other than `null`.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn get_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, SchemaError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::malformed(key, "expected a string")),
    }
}

fn get_bool(obj: &Map<String, Value>, key: &str) -> Result<Option<bool>, SchemaError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(SchemaError::malformed(key, "expected a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_interface() {
        let model = parse_interface(&json!({
            "name": "Foo",
            "static": false,
            "copyable": true,
            "parameterlessConstructor": { "definition": "default", "visibility": "public" },
            "names": { "ObjC": "PSMFoo", "camelBack": "theFoo" },
            "aliases": { "ObjC": ["FooAlias"], "Swift": ["FooAliasSwift"] }
        }))
        .unwrap();

        assert_eq!(model.canonical_name().unwrap(), "Foo");
        assert_eq!(model.resolve_static(), Ok(false));
        assert_eq!(model.lang_names[&Language::ObjC], "PSMFoo");
        assert_eq!(model.style_names[&NameStyle::CamelBack], "theFoo");
        assert_eq!(model.resolve_aliases(Language::Swift), ["FooAliasSwift"]);
        assert_eq!(
            model.resolve_parameterless_constructor().unwrap().definition,
            ConstructorDefinition::Default
        );
    }

    #[test]
    fn ignores_unrelated_keys_and_nulls() {
        let model = parse_interface(&json!({
            "name": "Foo",
            "static": null,
            "methods": [{ "name": "run" }]
        }))
        .unwrap();

        assert_eq!(model.is_static, None);
        assert!(model.aliases.is_empty());
    }

    #[test]
    fn skips_tags_of_other_targets() {
        let model = parse_interface(&json!({
            "name": "Foo",
            "names": { "Kotlin": { "package": "foo" }, "ObjC": "PSMFoo" },
            "aliases": { "Kotlin": ["FooK"], "Swift": ["FooAlias"] }
        }))
        .unwrap();

        assert_eq!(model.lang_names.len(), 1);
        assert_eq!(model.lang_names[&Language::ObjC], "PSMFoo");
        assert!(model.style_names.is_empty());
        assert_eq!(model.aliases.len(), 1);
        assert_eq!(model.resolve_aliases(Language::Swift), ["FooAlias"]);
    }

    #[test]
    fn rejects_malformed_known_tags() {
        let err = parse_interface(&json!({ "name": "Foo", "names": { "Swift": 1 } })).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { ref field, .. } if field == "names.Swift"));
    }

    #[test]
    fn rejects_unknown_visibility() {
        let err = parse_interface(&json!({
            "name": "Foo",
            "parameterlessConstructor": { "definition": "default", "visibility": "internal" }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Malformed { ref field, .. } if field == "parameterlessConstructor.visibility"
        ));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_interface(&json!({ "name": 3 })).is_err());
        assert!(parse_interface(&json!({ "copyable": "yes" })).is_err());
        assert!(parse_interface(&json!({ "aliases": { "ObjC": [1] } })).is_err());
        assert!(parse_interface_str("[1, 2]").is_err());
        assert!(parse_interface_str("{ not json").is_err());
    }
}
