//! Platform binding generation from interface models.
//!
//! `ifacegen-emit` turns an [`InterfaceModel`](ifacegen_model::InterfaceModel)
//! into the two source files a platform needs to expose a core-library class:
//! a public declaration and an implementation that bridges to the shared
//! native object.
//!
//! # Architecture
//!
//! ```text
//! InterfaceModel ──> Emitter ──┬─> declaration ────┐
//!                              └─> implementation ─┴─> GeneratedArtifact ──> ArtifactWriter
//! ```
//!
//! Import sets and member surfaces are built fresh for every file, so an
//! emitter can be shared between threads.
//!
//! # Example
//!
//! ```
//! use ifacegen_emit::{Emitter, ObjCEmitter};
//! use ifacegen_model::{ConstructorDefinition, InterfaceModel, Visibility};
//!
//! let model = InterfaceModel::new("Foo")
//!     .with_static(false)
//!     .with_copyable(true)
//!     .with_constructor(ConstructorDefinition::Default, Visibility::Public);
//!
//! let artifact = ObjCEmitter::default().emit("Foo", &model).unwrap();
//! assert!(artifact.declaration.contains("@interface Foo : NSObject<NSCopying>"));
//! assert!(artifact.implementation.contains("std::shared_ptr<psm::Foo> m_foo;"));
//! ```
//!
//! # Feature Flags
//!
//! - `backend-objc` - Objective-C++ header and implementation (default)

pub mod generate;
pub mod imports;
pub mod output;
pub mod sections;
pub mod traits;
pub mod writer;

pub use generate::{GenerateError, generate_interface};
pub use imports::{ImportKind, ImportSet, ImportTier};
pub use sections::{MemberSpacing, Surface};
pub use traits::{Emitter, GeneratedArtifact, disclaimer};
pub use writer::{ArtifactWriter, FsWriter, MemoryWriter, WriteError};

#[cfg(feature = "backend-objc")]
pub use output::objc::{ObjCEmitter, ObjCOptions};
