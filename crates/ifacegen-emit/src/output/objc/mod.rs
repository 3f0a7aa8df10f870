//! Objective-C++ bindings for Apple platforms.
//!
//! The header (`.h`) exposes an `NSObject` subclass to Objective-C and, via
//! `NS_SWIFT_NAME`, to Swift. The implementation (`.mm`) owns the C++ core
//! object through a `std::shared_ptr` member.

mod header;
mod source;

use crate::traits::Emitter;
use ifacegen_model::{InterfaceModel, Language, NameStyle, SchemaError};
use serde::Deserialize;

/// Project-wide names baked into the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObjCOptions {
    /// Framework directory of the public headers (`#import <Framework/Name.h>`).
    pub framework: String,
    /// C++ namespace of the core library.
    pub namespace: String,
    /// Export macro placed before `@interface`.
    pub api_macro: String,
    /// Macro defined only while building the library itself.
    pub build_flag: String,
}

impl Default for ObjCOptions {
    fn default() -> Self {
        Self {
            framework: "Posemesh".into(),
            namespace: "psm".into(),
            api_macro: "PSM_API".into(),
            build_flag: "POSEMESH_BUILD".into(),
        }
    }
}

/// Objective-C++ emitter.
#[derive(Debug, Clone, Default)]
pub struct ObjCEmitter {
    options: ObjCOptions,
}

impl ObjCEmitter {
    pub fn new(options: ObjCOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ObjCOptions {
        &self.options
    }
}

impl Emitter for ObjCEmitter {
    fn name(&self) -> &'static str {
        "objc"
    }

    fn language(&self) -> Language {
        Language::ObjC
    }

    fn declaration_extension(&self) -> &'static str {
        "h"
    }

    fn implementation_extension(&self) -> &'static str {
        "mm"
    }

    fn emit_declaration(
        &self,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<String, SchemaError> {
        tracing::debug!(interface = interface_name, "emitting Objective-C header");
        header::emit(&self.options, interface_name, model)
    }

    fn emit_implementation(
        &self,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<String, SchemaError> {
        tracing::debug!(interface = interface_name, "emitting Objective-C++ source");
        source::emit(&self.options, interface_name, model)
    }
}

/// Names used across one emitted file.
struct Names {
    /// Objective-C class name.
    objc: String,
    /// Swift name of the class.
    swift: String,
    /// Qualified C++ core type, e.g. `psm::Foo`.
    cxx: String,
    /// camelBack variable name.
    variable: String,
    /// Backing `shared_ptr` member.
    member: String,
    managed_getter: String,
    native_getter: String,
    init_with_managed: String,
    init_with_native: String,
}

impl Names {
    fn resolve(
        options: &ObjCOptions,
        interface_name: &str,
        model: &InterfaceModel,
    ) -> Result<Self, SchemaError> {
        let variable = model.style_name(NameStyle::CamelBack)?;
        Ok(Self {
            objc: model.lang_class_name(Language::ObjC)?,
            swift: model.lang_class_name(Language::Swift)?,
            cxx: format!(
                "{}::{}",
                options.namespace,
                model.lang_class_name(Language::Cxx)?
            ),
            member: format!("m_{variable}"),
            variable,
            managed_getter: format!("managed{interface_name}"),
            native_getter: format!("native{interface_name}"),
            init_with_managed: format!("initWithManaged{interface_name}"),
            init_with_native: format!("initWithNative{interface_name}"),
        })
    }
}
