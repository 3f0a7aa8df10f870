//! Integration tests for interface parsing.

use ifacegen_model::{
    ConstructorDefinition, InterfaceModel, Language, SchemaError, Visibility, parse_interface_str,
};

fn load_fixture(name: &str) -> InterfaceModel {
    let path = format!("tests/fixtures/{}.json", name);
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} not found", name));
    parse_interface_str(&content).expect("invalid interface")
}

#[test]
fn foo_matches_builder() {
    let expected = InterfaceModel::new("Foo")
        .with_static(false)
        .with_copyable(true)
        .with_constructor(ConstructorDefinition::Default, Visibility::Public)
        .with_aliases(Language::ObjC, ["FooAlias"])
        .with_aliases(Language::Swift, ["FooAliasSwift"]);

    assert_eq!(load_fixture("foo"), expected);
}

#[test]
fn key_order_does_not_matter() {
    assert_eq!(load_fixture("foo"), load_fixture("foo_reordered"));
}

#[test]
fn builder_order_does_not_matter() {
    let a = InterfaceModel::new("Foo")
        .with_aliases(Language::Swift, ["S"])
        .with_aliases(Language::ObjC, ["O"])
        .with_copyable(true)
        .with_static(false);
    let b = InterfaceModel::new("Foo")
        .with_static(false)
        .with_copyable(true)
        .with_aliases(Language::ObjC, ["O"])
        .with_aliases(Language::Swift, ["S"]);

    assert_eq!(a, b);
}

#[test]
fn static_utils() {
    let model = load_fixture("utils");
    assert_eq!(model.resolve_static(), Ok(true));
    assert!(model.resolve_parameterless_constructor().unwrap().is_deleted());
    assert!(model.paired_aliases(Language::ObjC, Language::Swift).unwrap().is_empty());
}

#[test]
fn missing_constructor_surfaces_on_resolve() {
    let model = parse_interface_str(r#"{ "name": "Bare", "static": false }"#).unwrap();
    assert_eq!(
        model.resolve_parameterless_constructor(),
        Err(SchemaError::MissingField("parameterlessConstructor"))
    );
}
