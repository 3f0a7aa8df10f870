//! Objective-C++ implementation (`.mm`) generation.

use super::{Names, ObjCOptions};
use crate::imports::{ImportKind, ImportSet, ImportTier};
use crate::sections::{MemberSpacing, Surface, join_blocks};
use crate::traits::disclaimer;
use ifacegen_model::{InterfaceModel, SchemaError};
use std::fmt::Write;

pub(super) fn emit(
    options: &ObjCOptions,
    interface_name: &str,
    model: &InterfaceModel,
) -> Result<String, SchemaError> {
    let names = Names::resolve(options, interface_name, model)?;
    let is_static = model.resolve_static()?;
    let ctor = model.resolve_parameterless_constructor()?;

    let mut imports = ImportSet::new()
        .with(
            ImportTier::First,
            ImportKind::Import,
            format!("#import <{}/{}.h>", options.framework, interface_name),
        )
        .with(
            ImportTier::First,
            ImportKind::Include,
            format!("#include <{}/{}.hpp>", options.framework, interface_name),
        );
    let mut body = String::new();

    if is_static {
        writeln!(body, "@implementation {}", names.objc).unwrap();
    } else {
        writeln!(body, "@implementation {} {{", names.objc).unwrap();
        writeln!(body, "    std::shared_ptr<{}> {};", names.cxx, names.member).unwrap();
        body.push_str("}\n");
        imports.add(ImportTier::First, ImportKind::Include, "#include <memory>");
    }

    let mut public = Surface::new();
    let mut private = Surface::new();

    if !is_static {
        if !ctor.is_deleted() {
            let init = default_init(&names);
            if ctor.is_public() {
                public.constructors.push(init);
            } else {
                private.constructors.push(init);
            }
            imports.add(ImportTier::First, ImportKind::Include, "#include <new>");
        }

        if model.resolve_copyable() {
            public.operators.push(copy_with_zone(&names));
            imports.add(ImportTier::First, ImportKind::Include, "#include <new>");
        }

        private.constructors.push(init_with_managed(&names));
        private.constructors.push(init_with_native(&names));
        imports.add(ImportTier::First, ImportKind::Include, "#include <utility>");
    }

    let members = join_blocks([
        public.render(MemberSpacing::Spaced),
        private.render(MemberSpacing::Spaced),
    ]);
    if !members.is_empty() {
        body.push('\n');
        body.push_str(&members);
    }

    if !is_static {
        body.push('\n');
        body.push_str(&accessors(options, &names));
    }

    body.push_str("\n@end\n");

    Ok(format!(
        "{}{}\n{}",
        disclaimer(interface_name),
        imports.render(),
        body
    ))
}

/// `init`: allocate the core object without throwing and hand it over.
fn default_init(names: &Names) -> String {
    let var = &names.variable;
    let mut s = String::new();
    s.push_str("- (instancetype)init\n{\n");
    writeln!(s, "    auto* {var} = new (std::nothrow) {};", names.cxx).unwrap();
    writeln!(s, "    if (!{var}) {{").unwrap();
    s.push_str("        return nil;\n    }\n");
    writeln!(s, "    self = [self {}:{var}];", names.init_with_native).unwrap();
    s.push_str("    if (!self) {\n");
    writeln!(s, "        delete {var};").unwrap();
    s.push_str("        return nil;\n    }\n    return self;\n}\n");
    s
}

/// `copyWithZone:` for `NSCopying`, copy-constructing the core object.
fn copy_with_zone(names: &Names) -> String {
    let var = &names.variable;
    let member = &names.member;
    let mut s = String::new();
    s.push_str("- (id)copyWithZone:(NSZone*)zone\n{\n");
    writeln!(s, "    NSAssert({member}.get() != nullptr, @\"{member} is null\");").unwrap();
    writeln!(s, "    auto* {var} = new (std::nothrow) {}(*{member});", names.cxx).unwrap();
    writeln!(s, "    if (!{var}) {{").unwrap();
    s.push_str("        return nil;\n    }\n");
    writeln!(
        s,
        "    {}* copied = [[[self class] allocWithZone:zone] {}:{var}];",
        names.objc, names.init_with_native
    )
    .unwrap();
    s.push_str("    if (!copied) {\n");
    writeln!(s, "        delete {var};").unwrap();
    s.push_str("        return nil;\n    }\n    return copied;\n}\n");
    s
}

/// Adopt an existing managed handle.
fn init_with_managed(names: &Names) -> String {
    let var = &names.variable;
    let mut s = String::new();
    writeln!(
        s,
        "- (instancetype){}:(std::shared_ptr<{}>){var}",
        names.init_with_managed, names.cxx
    )
    .unwrap();
    s.push_str("{\n");
    writeln!(s, "    NSAssert({var}.get() != nullptr, @\"{var} is null\");").unwrap();
    s.push_str("    self = [super init];\n    if (!self) {\n        return nil;\n    }\n");
    writeln!(s, "    {} = std::move({var});", names.member).unwrap();
    s.push_str("    return self;\n}\n");
    s
}

/// Take ownership of a raw core pointer.
///
/// The pointer is parked in a `unique_ptr` and moved into the `shared_ptr`
/// member. Constructing a `shared_ptr` from a `unique_ptr` has no effect when
/// it throws, so on failure ownership is handed back and the caller still
/// owns (and must release) the pointer.
fn init_with_native(names: &Names) -> String {
    let var = &names.variable;
    let owner = format!("{var}Owner");
    let mut s = String::new();
    writeln!(s, "- (instancetype){}:({}*){var}", names.init_with_native, names.cxx).unwrap();
    s.push_str("{\n");
    writeln!(s, "    NSAssert({var} != nullptr, @\"{var} is null\");").unwrap();
    s.push_str("    self = [super init];\n    if (!self) {\n        return nil;\n    }\n");
    writeln!(s, "    std::unique_ptr<{}> {owner}({var});", names.cxx).unwrap();
    s.push_str("    try {\n");
    writeln!(
        s,
        "        {} = std::shared_ptr<{}>(std::move({owner}));",
        names.member, names.cxx
    )
    .unwrap();
    s.push_str("    } catch (...) {\n");
    writeln!(s, "        (void){owner}.release();").unwrap();
    s.push_str("        return nil;\n    }\n    return self;\n}\n");
    s
}

/// Library-internal accessors for the managed handle and the raw pointer.
fn accessors(options: &ObjCOptions, names: &Names) -> String {
    let member = &names.member;
    let mut s = String::new();
    writeln!(s, "#if defined({})", options.build_flag).unwrap();
    writeln!(s, "- (void*){}\n{{", names.managed_getter).unwrap();
    writeln!(s, "    NSAssert({member}.get() != nullptr, @\"{member} is null\");").unwrap();
    writeln!(s, "    return &{member};\n}}\n").unwrap();
    writeln!(s, "- (void*){}\n{{", names.native_getter).unwrap();
    writeln!(s, "    NSAssert({member}.get() != nullptr, @\"{member} is null\");").unwrap();
    writeln!(s, "    return {member}.get();\n}}").unwrap();
    s.push_str("#endif\n");
    s
}
