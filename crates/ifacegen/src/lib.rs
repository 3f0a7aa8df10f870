//! Driver for ifacegen.
//!
//! Finds interface definitions, runs an emitter over each one and persists
//! the results. The emission itself lives in `ifacegen-emit`; this crate only
//! deals with configuration, files and reporting.

pub mod config;
pub mod driver;

pub use config::{CONFIG_FILE, ConfigError, IfacegenConfig, ResolvedPaths};
pub use driver::{RunSummary, discover, interface_name, load_interface, run};
