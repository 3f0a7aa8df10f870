//! Discovery of interface definitions and per-file generation.

use anyhow::{Context, Result};
use ifacegen_emit::{ArtifactWriter, Emitter, generate_interface};
use ifacegen_model::{InterfaceModel, parse_interface_str};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Interfaces written, in processing order.
    pub generated: Vec<String>,
    /// Interfaces skipped, with the reason.
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// All `*.json` files below `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "json") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Interface name of a definition file: its file stem.
pub fn interface_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

pub fn load_interface(path: &Path) -> Result<InterfaceModel> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_interface_str(&content).with_context(|| format!("invalid interface {}", path.display()))
}

/// Generate every interface found below `dir`.
///
/// A failing interface is logged and skipped; with `fail_fast` the run stops
/// at the first failure instead.
pub fn run(
    emitter: &dyn Emitter,
    dir: &Path,
    writer: &dyn ArtifactWriter,
    fail_fast: bool,
) -> Result<RunSummary> {
    let files = discover(dir)?;
    tracing::info!(count = files.len(), dir = %dir.display(), "discovered interfaces");

    let mut summary = RunSummary::default();
    for path in &files {
        let Some(name) = interface_name(path) else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };

        let result = load_interface(path)
            .and_then(|model| Ok(generate_interface(emitter, name, &model, writer)?));

        match result {
            Ok(()) => summary.generated.push(name.to_string()),
            Err(err) => {
                tracing::error!(interface = name, "{:#}", err);
                if fail_fast {
                    return Err(err);
                }
                summary.failed.push((name.to_string(), format!("{:#}", err)));
            }
        }
    }
    Ok(summary)
}
