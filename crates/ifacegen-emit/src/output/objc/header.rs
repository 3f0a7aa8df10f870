//! Objective-C header (`.h`) generation.

use super::{Names, ObjCOptions};
use crate::imports::{ImportKind, ImportSet, ImportTier};
use crate::sections::{MemberSpacing, Surface};
use crate::traits::disclaimer;
use ifacegen_model::{InterfaceModel, Language, SchemaError};
use std::fmt::Write;

pub(super) fn emit(
    options: &ObjCOptions,
    interface_name: &str,
    model: &InterfaceModel,
) -> Result<String, SchemaError> {
    let names = Names::resolve(options, interface_name, model)?;
    let is_static = model.resolve_static()?;
    let copyable = model.resolve_copyable();
    let ctor = model.resolve_parameterless_constructor()?;
    let aliases = model.paired_aliases(Language::ObjC, Language::Swift)?;

    let imports = ImportSet::new()
        .with(ImportTier::First, ImportKind::Import, "#import <Foundation/Foundation.h>")
        .with(ImportTier::Second, ImportKind::Import, "#import \"API.h\"");
    let mut body = String::new();

    let protocols = if copyable { "<NSCopying>" } else { "" };
    writeln!(
        body,
        "NS_SWIFT_NAME({}) {} @interface {} : NSObject{}",
        names.swift, options.api_macro, names.objc, protocols
    )
    .unwrap();

    let mut public = Surface::new();
    if is_static || ctor.is_deleted() || !ctor.is_public() {
        public
            .constructors
            .push("- (instancetype)init NS_UNAVAILABLE;\n".into());
    } else {
        public.constructors.push("- (instancetype)init;\n".into());
    }

    if !public.is_empty() {
        body.push('\n');
        body.push_str(&public.render(MemberSpacing::Compact));
    }

    if !is_static {
        body.push('\n');
        writeln!(body, "#if defined({})", options.build_flag).unwrap();
        writeln!(body, "- (void*){};", names.managed_getter).unwrap();
        writeln!(body, "- (void*){};", names.native_getter).unwrap();
        body.push_str("#endif\n");
    }

    body.push_str("\n@end\n");

    if !aliases.is_empty() {
        body.push_str("\n#if defined(__swift__)\n");
        for (alias, swift_alias) in &aliases {
            writeln!(
                body,
                "typedef {}* __{} NS_SWIFT_NAME({});",
                names.objc, alias, swift_alias
            )
            .unwrap();
        }
        body.push_str("#else\n");
        for (alias, _) in &aliases {
            writeln!(body, "@compatibility_alias {} {};", alias, names.objc).unwrap();
        }
        body.push_str("#endif\n");
    }

    Ok(format!(
        "{}{}\n{}",
        disclaimer(interface_name),
        imports.render(),
        body
    ))
}
