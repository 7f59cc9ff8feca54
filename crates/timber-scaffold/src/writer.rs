//! Artifact writing with per-file failure isolation

use crate::error::ScaffoldError;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The kinds of file the scaffolder produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Theme header stylesheet (`style.css`)
    ThemeStylesheet,
    /// Page controller (`<page>.php`)
    Controller,
    /// Page markup template (`templates/<page>.twig`)
    Markup,
    /// Page stylesheet stub (`styles/scss/<page>.scss`)
    Stylesheet,
}

impl ArtifactKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::ThemeStylesheet => "theme stylesheet",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Markup => "markup template",
            ArtifactKind::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Destination for rendered artifacts
///
/// Implementations create the file or truncate an existing one. They must not
/// create missing parent directories: a missing `templates/` folder is a
/// failure for that one artifact, not something to paper over.
pub trait ArtifactWriter: Send + Sync {
    fn write(&self, path: &Path, contents: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// Writes artifacts to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactWriter;

impl ArtifactWriter for FsArtifactWriter {
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents).await
    }
}

/// Result of one write attempt
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub result: Result<(), ScaffoldError>,
}

impl ArtifactOutcome {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ScaffoldError> {
        self.result.as_ref().err()
    }
}

/// Write one artifact, turning any failure into an outcome instead of an error
pub async fn write_artifact<W: ArtifactWriter>(
    writer: &W,
    kind: ArtifactKind,
    path: PathBuf,
    contents: &str,
) -> ArtifactOutcome {
    let result = writer
        .write(&path, contents)
        .await
        .map_err(|cause| ScaffoldError::Write {
            kind,
            path: path.clone(),
            cause,
        });

    ArtifactOutcome { kind, path, result }
}
