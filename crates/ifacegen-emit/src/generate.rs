//! Generation of one interface from model to persisted files.

use crate::traits::Emitter;
use crate::writer::{ArtifactWriter, WriteError};
use ifacegen_model::{InterfaceModel, SchemaError};

/// Error that aborts generation of one interface.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid interface {interface}")]
    Schema {
        interface: String,
        source: SchemaError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Emit both files for `interface_name` and hand them to `writer`.
///
/// Nothing is written unless both files were generated.
pub fn generate_interface(
    emitter: &dyn Emitter,
    interface_name: &str,
    model: &InterfaceModel,
    writer: &dyn ArtifactWriter,
) -> Result<(), GenerateError> {
    let artifact = emitter
        .emit(interface_name, model)
        .map_err(|source| GenerateError::Schema {
            interface: interface_name.to_string(),
            source,
        })?;
    tracing::debug!(
        interface = interface_name,
        emitter = emitter.name(),
        "generated artifacts"
    );
    writer.write(emitter, interface_name, &artifact)?;
    Ok(())
}
