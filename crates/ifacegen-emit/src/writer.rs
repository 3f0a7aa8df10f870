//! Persisting generated artifacts.

use crate::traits::{Emitter, GeneratedArtifact};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Error that can occur while persisting an artifact.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for the files of one interface.
pub trait ArtifactWriter: Send + Sync {
    fn write(
        &self,
        emitter: &dyn Emitter,
        interface_name: &str,
        artifact: &GeneratedArtifact,
    ) -> Result<(), WriteError>;
}

/// Writes declarations under one root and implementations under another.
///
/// Existing files are overwritten. Each file is written in a single call.
#[derive(Debug, Clone)]
pub struct FsWriter {
    include_root: PathBuf,
    src_root: PathBuf,
}

impl FsWriter {
    pub fn new(include_root: impl Into<PathBuf>, src_root: impl Into<PathBuf>) -> Self {
        Self {
            include_root: include_root.into(),
            src_root: src_root.into(),
        }
    }

    /// `<include_root>/<name>.<ext>` of the declaration.
    pub fn declaration_path(&self, emitter: &dyn Emitter, interface_name: &str) -> PathBuf {
        self.include_root
            .join(format!("{}.{}", interface_name, emitter.declaration_extension()))
    }

    /// `<src_root>/<name>.<ext>` of the implementation.
    pub fn implementation_path(&self, emitter: &dyn Emitter, interface_name: &str) -> PathBuf {
        self.src_root
            .join(format!("{}.{}", interface_name, emitter.implementation_extension()))
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(())
}

impl ArtifactWriter for FsWriter {
    fn write(
        &self,
        emitter: &dyn Emitter,
        interface_name: &str,
        artifact: &GeneratedArtifact,
    ) -> Result<(), WriteError> {
        write_file(
            &self.declaration_path(emitter, interface_name),
            &artifact.declaration,
        )?;
        write_file(
            &self.implementation_path(emitter, interface_name),
            &artifact.implementation,
        )
    }
}

/// Keeps artifacts in memory, keyed by interface name.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    artifacts: Mutex<BTreeMap<String, GeneratedArtifact>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, interface_name: &str) -> Option<GeneratedArtifact> {
        self.artifacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(interface_name)
            .cloned()
    }

    /// Names of all written interfaces, sorted.
    pub fn names(&self) -> Vec<String> {
        self.artifacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl ArtifactWriter for MemoryWriter {
    fn write(
        &self,
        _emitter: &dyn Emitter,
        interface_name: &str,
        artifact: &GeneratedArtifact,
    ) -> Result<(), WriteError> {
        self.artifacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(interface_name.to_string(), artifact.clone());
        Ok(())
    }
}

#[cfg(all(test, feature = "backend-objc"))]
mod tests {
    use super::*;
    use crate::output::ObjCEmitter;
    use tempfile::TempDir;

    fn artifact() -> GeneratedArtifact {
        GeneratedArtifact {
            declaration: "decl\n".into(),
            implementation: "impl\n".into(),
        }
    }

    #[test]
    fn fs_writer_uses_emitter_extensions() {
        let dir = TempDir::new().unwrap();
        let writer = FsWriter::new(dir.path().join("include/Posemesh"), dir.path().join("src"));
        let emitter = ObjCEmitter::default();

        writer.write(&emitter, "Foo", &artifact()).unwrap();

        let header = dir.path().join("include/Posemesh/Foo.h");
        let source = dir.path().join("src/Foo.mm");
        assert_eq!(std::fs::read_to_string(header).unwrap(), "decl\n");
        assert_eq!(std::fs::read_to_string(source).unwrap(), "impl\n");
    }

    #[test]
    fn fs_writer_overwrites() {
        let dir = TempDir::new().unwrap();
        let writer = FsWriter::new(dir.path(), dir.path());
        let emitter = ObjCEmitter::default();
        std::fs::write(dir.path().join("Foo.h"), "stale contents that are longer").unwrap();

        writer.write(&emitter, "Foo", &artifact()).unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("Foo.h")).unwrap(), "decl\n");
    }

    #[test]
    fn fs_writer_reports_failures() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let writer = FsWriter::new(blocker.join("include"), dir.path());

        let err = writer
            .write(&ObjCEmitter::default(), "Foo", &artifact())
            .unwrap_err();
        assert!(matches!(err, WriteError::CreateDir { .. }));
    }

    #[test]
    fn memory_writer_collects() {
        let writer = MemoryWriter::new();
        writer.write(&ObjCEmitter::default(), "B", &artifact()).unwrap();
        writer.write(&ObjCEmitter::default(), "A", &artifact()).unwrap();

        assert_eq!(writer.names(), ["A", "B"]);
        assert_eq!(writer.get("A"), Some(artifact()));
        assert_eq!(writer.get("C"), None);
    }
}
