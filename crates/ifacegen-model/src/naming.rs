//! Name derivation shared by all emitters.
//!
//! An explicit name in the schema always wins. Otherwise the name is derived
//! from the canonical name by a casing transform that cannot fail.

use crate::error::SchemaError;
use crate::model::{InterfaceModel, Language, NameStyle};

/// Class and variable names for one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNaming {
    pub class_name: String,
    pub variable_name: String,
}

/// Split an identifier into words.
///
/// Boundaries are non-alphanumeric characters, a lowercase letter or digit
/// followed by an uppercase letter, and the end of an acronym
/// (`URLSession` splits into `URL` and `Session`).
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            if c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric()) {
                words.push(std::mem::take(&mut current));
            } else if c.is_lowercase() && prev.is_uppercase() && current.chars().count() > 1 {
                let before = current.chars().rev().nth(1);
                if before.is_some_and(char::is_uppercase) {
                    current.pop();
                    words.push(std::mem::replace(&mut current, prev.to_string()));
                }
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply a casing style to an identifier.
pub fn apply_style(name: &str, style: NameStyle) -> String {
    let words = split_words(name);
    match style {
        NameStyle::CamelCase => words.iter().map(|w| capitalize(w)).collect(),
        NameStyle::CamelBack => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        NameStyle::LowerCase => words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        NameStyle::UpperCase => words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
    }
}

impl InterfaceModel {
    /// The canonical name every other name derives from.
    pub fn canonical_name(&self) -> Result<&str, SchemaError> {
        self.name.as_deref().ok_or(SchemaError::MissingField("name"))
    }

    /// Class name in `language`.
    pub fn lang_class_name(&self, language: Language) -> Result<String, SchemaError> {
        match self.lang_names.get(&language) {
            Some(name) => Ok(name.clone()),
            None => Ok(apply_style(self.canonical_name()?, NameStyle::CamelCase)),
        }
    }

    /// Identifier for the canonical name in `style`.
    pub fn style_name(&self, style: NameStyle) -> Result<String, SchemaError> {
        match self.style_names.get(&style) {
            Some(name) => Ok(name.clone()),
            None => Ok(apply_style(self.canonical_name()?, style)),
        }
    }

    pub fn resolve_naming(&self, language: Language) -> Result<ResolvedNaming, SchemaError> {
        Ok(ResolvedNaming {
            class_name: self.lang_class_name(language)?,
            variable_name: self.style_name(NameStyle::CamelBack)?,
        })
    }

    /// Declared aliases for `language`, in schema order.
    pub fn resolve_aliases(&self, language: Language) -> &[String] {
        self.aliases.get(&language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Aliases of `primary` paired by position with those of `companion`.
    pub fn paired_aliases(
        &self,
        primary: Language,
        companion: Language,
    ) -> Result<Vec<(String, String)>, SchemaError> {
        let first = self.resolve_aliases(primary);
        let second = self.resolve_aliases(companion);
        if first.len() != second.len() {
            return Err(SchemaError::AliasMismatch {
                primary: primary.tag(),
                primary_len: first.len(),
                companion: companion.tag(),
                companion_len: second.len(),
            });
        }
        Ok(first.iter().cloned().zip(second.iter().cloned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_case_and_separators() {
        assert_eq!(split_words("PoseEstimation"), ["Pose", "Estimation"]);
        assert_eq!(split_words("URLSession"), ["URL", "Session"]);
        assert_eq!(split_words("foo_bar-baz qux"), ["foo", "bar", "baz", "qux"]);
        assert_eq!(split_words("Vector3D"), ["Vector3", "D"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn applies_styles() {
        assert_eq!(apply_style("PoseEstimation", NameStyle::CamelBack), "poseEstimation");
        assert_eq!(apply_style("URLSession", NameStyle::CamelBack), "urlSession");
        assert_eq!(apply_style("config_manager", NameStyle::CamelCase), "ConfigManager");
        assert_eq!(apply_style("ConfigManager", NameStyle::LowerCase), "config_manager");
        assert_eq!(apply_style("ConfigManager", NameStyle::UpperCase), "CONFIG_MANAGER");
    }

    #[test]
    fn explicit_names_win() {
        let model = InterfaceModel::new("Config")
            .with_lang_name(Language::ObjC, "PSMConfig")
            .with_style_name(NameStyle::CamelBack, "cfg");

        assert_eq!(model.lang_class_name(Language::ObjC).unwrap(), "PSMConfig");
        assert_eq!(model.lang_class_name(Language::Swift).unwrap(), "Config");
        assert_eq!(
            model.resolve_naming(Language::ObjC).unwrap(),
            ResolvedNaming {
                class_name: "PSMConfig".into(),
                variable_name: "cfg".into(),
            }
        );
    }

    #[test]
    fn missing_name_is_reported() {
        let model = InterfaceModel::default();
        assert_eq!(
            model.lang_class_name(Language::Cxx),
            Err(SchemaError::MissingField("name"))
        );
    }

    #[test]
    fn aliases_pair_by_position() {
        let model = InterfaceModel::new("Foo")
            .with_aliases(Language::ObjC, ["A", "B"])
            .with_aliases(Language::Swift, ["SwiftA", "SwiftB"]);

        assert_eq!(
            model.paired_aliases(Language::ObjC, Language::Swift).unwrap(),
            vec![
                ("A".to_string(), "SwiftA".to_string()),
                ("B".to_string(), "SwiftB".to_string()),
            ]
        );
        assert!(model.resolve_aliases(Language::JS).is_empty());
    }

    #[test]
    fn unequal_alias_lists_are_rejected() {
        let model = InterfaceModel::new("Foo").with_aliases(Language::ObjC, ["A"]);
        assert!(matches!(
            model.paired_aliases(Language::ObjC, Language::Swift),
            Err(SchemaError::AliasMismatch { primary_len: 1, companion_len: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn camel_case_is_stable(name in "[A-Za-z][A-Za-z0-9_]{0,24}") {
            let once = apply_style(&name, NameStyle::CamelCase);
            prop_assert_eq!(apply_style(&once, NameStyle::CamelCase), once);
        }

        #[test]
        fn styled_names_are_identifiers(name in "[A-Za-z][A-Za-z0-9_ -]{0,24}") {
            for style in NameStyle::ALL {
                let styled = apply_style(&name, style);
                prop_assert!(styled.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            }
        }
    }
}
