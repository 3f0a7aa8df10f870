//! Configuration for ifacegen.
//!
//! Loaded from `ifacegen.toml` in the project root. Every key is optional;
//! command-line flags override file values.
//!
//! Example ifacegen.toml:
//! ```toml
//! [paths]
//! interfaces = "sdk/interfaces"
//! include_root = "sdk/platform/Apple/include/Posemesh"
//! src_root = "sdk/platform/Apple/src"
//!
//! [objc]
//! framework = "Posemesh"
//! namespace = "psm"
//! api_macro = "PSM_API"
//! build_flag = "POSEMESH_BUILD"
//! ```

use ifacegen_emit::ObjCOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "ifacegen.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the `*.json` interface definitions.
    pub interfaces: Option<PathBuf>,
    /// Directory receiving the generated headers.
    pub include_root: Option<PathBuf>,
    /// Directory receiving the generated implementations.
    pub src_root: Option<PathBuf>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IfacegenConfig {
    pub paths: PathsConfig,
    pub objc: ObjCOptions,
}

/// Paths after applying defaults, anchored at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub interfaces: PathBuf,
    pub include_root: PathBuf,
    pub src_root: PathBuf,
}

impl IfacegenConfig {
    /// Load `ifacegen.toml` from `root`, or defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load a specific config file. The file must exist.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve paths against `root`, filling in the conventional layout.
    pub fn resolve_paths(&self, root: &Path) -> ResolvedPaths {
        let interfaces = self
            .paths
            .interfaces
            .clone()
            .unwrap_or_else(|| PathBuf::from("interfaces"));
        let include_root = self.paths.include_root.clone().unwrap_or_else(|| {
            Path::new("platform/Apple/include").join(&self.objc.framework)
        });
        let src_root = self
            .paths
            .src_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("platform/Apple/src"));

        ResolvedPaths {
            interfaces: root.join(interfaces),
            include_root: root.join(include_root),
            src_root: root.join(src_root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let dir = TempDir::new().unwrap();
        let config = IfacegenConfig::load(dir.path()).unwrap();
        assert_eq!(config, IfacegenConfig::default());
        assert_eq!(config.objc.framework, "Posemesh");

        let paths = config.resolve_paths(dir.path());
        assert_eq!(paths.interfaces, dir.path().join("interfaces"));
        assert_eq!(
            paths.include_root,
            dir.path().join("platform/Apple/include/Posemesh")
        );
        assert_eq!(paths.src_root, dir.path().join("platform/Apple/src"));
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[paths]\ninterfaces = \"defs\"\n\n[objc]\nframework = \"Acme\"\n",
        )
        .unwrap();

        let config = IfacegenConfig::load(dir.path()).unwrap();
        assert_eq!(config.objc.framework, "Acme");
        assert_eq!(config.objc.namespace, "psm");

        let paths = config.resolve_paths(dir.path());
        assert_eq!(paths.interfaces, dir.path().join("defs"));
        assert_eq!(paths.include_root, dir.path().join("platform/Apple/include/Acme"));
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[objc]\nframework = 3\n").unwrap();
        assert!(matches!(
            IfacegenConfig::load(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            IfacegenConfig::load_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
