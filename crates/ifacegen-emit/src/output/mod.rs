//! Output emitters for binding generation.
//!
//! Each emitter takes an [`InterfaceModel`](ifacegen_model::InterfaceModel)
//! and produces a declaration and an implementation. All emitters implement
//! the [`Emitter`](crate::traits::Emitter) trait.

// Objective-C++ (Apple platforms)
#[cfg(feature = "backend-objc")]
pub mod objc;

#[cfg(feature = "backend-objc")]
pub use objc::{ObjCEmitter, ObjCOptions};
