//! Interface model shared by the ifacegen emitters.
//!
//! A schema file describes one class of the native core library. Every target
//! platform reads it through the same [`InterfaceModel`] and derives names the
//! same way, so bindings generated for different platforms agree.
//!
//! ```text
//! interface.json ─> parse_interface ─> InterfaceModel ─┬─> naming  (class / variable names, aliases)
//!                                                      └─> attributes (static, copyable, constructor)
//! ```
//!
//! # Example
//!
//! ```
//! use ifacegen_model::{Language, parse_interface};
//!
//! let model = parse_interface(&serde_json::json!({
//!     "name": "PoseEstimation",
//!     "static": false,
//!     "copyable": false,
//!     "parameterlessConstructor": { "definition": "default", "visibility": "public" },
//!     "names": { "ObjC": "PSMPoseEstimation" }
//! }))
//! .unwrap();
//!
//! let naming = model.resolve_naming(Language::ObjC).unwrap();
//! assert_eq!(naming.class_name, "PSMPoseEstimation");
//! assert_eq!(naming.variable_name, "poseEstimation");
//! ```

pub mod attributes;
pub mod error;
pub mod input;
pub mod model;
pub mod naming;

pub use attributes::ResolvedConstructor;
pub use error::SchemaError;
pub use input::{parse_interface, parse_interface_str};
pub use model::{
    ConstructorDefinition, ConstructorSpec, InterfaceModel, Language, NameStyle, Visibility,
};
pub use naming::{ResolvedNaming, apply_style, split_words};
