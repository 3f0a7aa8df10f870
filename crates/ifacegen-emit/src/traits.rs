//! Traits for binding emitters.

use ifacegen_model::{InterfaceModel, Language, SchemaError};

/// The two files generated for one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Public header text.
    pub declaration: String,
    /// Implementation text bridging to the core object.
    pub implementation: String,
}

/// A per-platform binding emitter.
///
/// Emitters transform an [`InterfaceModel`] into a declaration and an
/// implementation for one target platform. Output is a pure function of the
/// interface name and the model: an emitter keeps no state between calls, so
/// one instance may serve many threads.
///
/// # Implementing Custom Emitters
///
/// ```ignore
/// use ifacegen_emit::Emitter;
/// use ifacegen_model::{InterfaceModel, Language, SchemaError};
///
/// struct JsEmitter;
///
/// impl Emitter for JsEmitter {
///     fn name(&self) -> &'static str { "js" }
///     fn language(&self) -> Language { Language::JS }
///     fn declaration_extension(&self) -> &'static str { "d.ts" }
///     fn implementation_extension(&self) -> &'static str { "cpp" }
///     fn emit_declaration(&self, name: &str, model: &InterfaceModel) -> Result<String, SchemaError> { /* ... */ }
///     fn emit_implementation(&self, name: &str, model: &InterfaceModel) -> Result<String, SchemaError> { /* ... */ }
/// }
/// ```
pub trait Emitter: Send + Sync {
    /// Unique emitter identifier (e.g., "objc").
    fn name(&self) -> &'static str;

    /// Primary target language.
    fn language(&self) -> Language;

    /// File extension of the declaration (e.g., "h").
    fn declaration_extension(&self) -> &'static str;

    /// File extension of the implementation (e.g., "mm").
    fn implementation_extension(&self) -> &'static str;

    /// Generate the public header.
    fn emit_declaration(
        &self,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<String, SchemaError>;

    /// Generate the implementation.
    fn emit_implementation(
        &self,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<String, SchemaError>;

    /// Generate both files.
    fn emit(
        &self,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<GeneratedArtifact, SchemaError> {
        Ok(GeneratedArtifact {
            declaration: self.emit_declaration(interface_name, model)?,
            implementation: self.emit_implementation(interface_name, model)?,
        })
    }
}

/// First line of every generated file.
pub fn disclaimer(interface_name: &str) -> String {
    format!(
        "/* This code is automatically generated from {interface_name}.json interface. \
         Do not modify it manually as it will be overwritten! */\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclaimer_names_the_schema() {
        assert_eq!(
            disclaimer("Config"),
            "/* This code is automatically generated from Config.json interface. Do not modify it manually as it will be overwritten! */\n"
        );
    }
}
