//! Normalized description of one generated class.
//!
//! The schema loader produces an [`InterfaceModel`] per interface file. Every
//! emitter reads the same model, so it carries names and aliases for all
//! target languages, not only the one a given emitter writes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A target language known to the shared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "CXX")]
    Cxx,
    #[serde(rename = "ObjC")]
    ObjC,
    #[serde(rename = "Swift")]
    Swift,
    #[serde(rename = "JS")]
    JS,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Cxx,
        Language::ObjC,
        Language::Swift,
        Language::JS,
    ];

    /// Tag used for this language in schema files.
    pub fn tag(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cxx => "CXX",
            Language::ObjC => "ObjC",
            Language::Swift => "Swift",
            Language::JS => "JS",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL.into_iter().find(|l| l.tag() == s).ok_or(())
    }
}

/// An identifier casing style, independent of any language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NameStyle {
    #[serde(rename = "CamelCase")]
    CamelCase,
    #[serde(rename = "camelBack")]
    CamelBack,
    #[serde(rename = "lower_case")]
    LowerCase,
    #[serde(rename = "UPPER_CASE")]
    UpperCase,
}

impl NameStyle {
    pub const ALL: [NameStyle; 4] = [
        NameStyle::CamelCase,
        NameStyle::CamelBack,
        NameStyle::LowerCase,
        NameStyle::UpperCase,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            NameStyle::CamelCase => "CamelCase",
            NameStyle::CamelBack => "camelBack",
            NameStyle::LowerCase => "lower_case",
            NameStyle::UpperCase => "UPPER_CASE",
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NameStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameStyle::ALL.into_iter().find(|st| st.tag() == s).ok_or(())
    }
}

/// How the parameterless constructor is provided by the core library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorDefinition {
    /// Hand-written in the core library.
    Defined,
    /// Compiler-provided.
    Default,
    /// Not constructible without arguments.
    Deleted,
}

/// Access level of a member in the core library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// The parameterless constructor as written in the schema.
///
/// Both fields are optional here so a missing value surfaces as a
/// [`SchemaError`](crate::SchemaError) when it is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSpec {
    pub definition: Option<ConstructorDefinition>,
    pub visibility: Option<Visibility>,
}

/// Normalized description of one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceModel {
    /// Canonical class name.
    pub name: Option<String>,
    /// Class has no instances.
    #[serde(rename = "static")]
    pub is_static: Option<bool>,
    pub copyable: Option<bool>,
    pub parameterless_constructor: Option<ConstructorSpec>,
    /// Explicit per-language class names.
    pub lang_names: BTreeMap<Language, String>,
    /// Explicit per-style identifiers.
    pub style_names: BTreeMap<NameStyle, String>,
    /// Per-language alias lists. Lists of different languages pair up by index.
    pub aliases: BTreeMap<Language, Vec<String>>,
}

impl InterfaceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    pub fn with_copyable(mut self, copyable: bool) -> Self {
        self.copyable = Some(copyable);
        self
    }

    pub fn with_constructor(
        mut self,
        definition: ConstructorDefinition,
        visibility: Visibility,
    ) -> Self {
        self.parameterless_constructor = Some(ConstructorSpec {
            definition: Some(definition),
            visibility: Some(visibility),
        });
        self
    }

    pub fn with_lang_name(mut self, language: Language, name: impl Into<String>) -> Self {
        self.lang_names.insert(language, name.into());
        self
    }

    pub fn with_style_name(mut self, style: NameStyle, name: impl Into<String>) -> Self {
        self.style_names.insert(style, name.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, language: Language, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .insert(language, aliases.into_iter().map(Into::into).collect());
        self
    }
}
