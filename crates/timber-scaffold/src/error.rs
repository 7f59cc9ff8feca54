//! Error kinds surfaced by the scaffolding engine

use crate::writer::ArtifactKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scaffolding a theme.
///
/// None of these abort a whole run on their own: the engine records them in a
/// [`ScaffoldReport`](crate::report::ScaffoldReport) and keeps going where it can.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The folder to extend with pages has not been initialized.
    #[error("Folder {} does not exist!", path.display())]
    FolderMissing { path: PathBuf },

    /// The starter tree could not be copied into the project folder.
    #[error(
        "Failed to copy starter theme from {origin} to {}: {cause}",
        destination.display()
    )]
    StarterCopy {
        origin: String,
        destination: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// A single artifact could not be written.
    #[error("Failed to write {kind} {}: {cause}", path.display())]
    Write {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The operator prompt could not be rendered or was aborted.
    #[error("Prompt couldn't be rendered in the current environment ({step}): {cause}")]
    Prompt {
        step: &'static str,
        #[source]
        cause: io::Error,
    },

    /// The layout file could not be read or parsed.
    #[error("Failed to load layout from {}: {cause}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ScaffoldError {
    /// Wrap a prompt failure, remembering which question was being asked
    pub fn prompt(step: &'static str, cause: io::Error) -> Self {
        Self::Prompt { step, cause }
    }
}
