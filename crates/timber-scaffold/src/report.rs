//! Progress reporting and the accumulated result of a scaffolding run

use crate::error::ScaffoldError;
use crate::writer::ArtifactOutcome;
use colored::Colorize;
use std::path::Path;

/// Receives progress as the scaffolder works
///
/// Calls arrive in the order the work happens, so output stays readable.
pub trait Reporter: Send + Sync {
    /// The starter tree was copied
    fn starter_copied(&self, destination: &Path, files: usize);

    /// One artifact was written or failed to write
    fn artifact(&self, outcome: &ArtifactOutcome);

    /// A step failed outside of artifact writing
    fn failure(&self, error: &ScaffoldError);

    /// Free-form message for the operator
    fn note(&self, message: &str);
}

/// Plain terminal output with colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn starter_copied(&self, destination: &Path, files: usize) {
        println!(
            "{} Starter theme copied successfully! ({} files in {})",
            "->".blue(),
            files,
            destination.display()
        );
    }

    fn artifact(&self, outcome: &ArtifactOutcome) {
        match &outcome.result {
            Ok(()) => println!("  {} {}", "Created:".green(), outcome.path.display()),
            Err(e) => eprintln!("  {} {}", "Error:".red(), e),
        }
    }

    fn failure(&self, error: &ScaffoldError) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    fn note(&self, message: &str) {
        println!("{}", message);
    }
}

/// Reporter that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn starter_copied(&self, _destination: &Path, _files: usize) {}
    fn artifact(&self, _outcome: &ArtifactOutcome) {}
    fn failure(&self, _error: &ScaffoldError) {}
    fn note(&self, _message: &str) {}
}

/// Everything that happened during one bootstrap or extend run
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Starter tree copy result (bootstrap only): files copied or the failure
    pub starter: Option<Result<usize, ScaffoldError>>,

    /// Every artifact write attempt, in order
    pub artifacts: Vec<ArtifactOutcome>,
}

impl ScaffoldReport {
    /// Number of artifacts written successfully
    pub fn written(&self) -> usize {
        self.artifacts.iter().filter(|o| o.is_written()).count()
    }

    /// Every failure recorded, starter copy first
    pub fn failures(&self) -> Vec<&ScaffoldError> {
        let starter = self.starter.as_ref().and_then(|r| r.as_ref().err());
        starter
            .into_iter()
            .chain(self.artifacts.iter().filter_map(ArtifactOutcome::error))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        let failed = self.artifacts.len() - self.written();
        if failed == 0 {
            format!("Created {} files", self.written())
        } else {
            format!("Created {} files, {} failed", self.written(), failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::ArtifactKind;
    use std::io;
    use std::path::PathBuf;

    fn ok(path: &str) -> ArtifactOutcome {
        ArtifactOutcome {
            kind: ArtifactKind::Controller,
            path: PathBuf::from(path),
            result: Ok(()),
        }
    }

    fn failed(path: &str) -> ArtifactOutcome {
        ArtifactOutcome {
            kind: ArtifactKind::Markup,
            path: PathBuf::from(path),
            result: Err(ScaffoldError::Write {
                kind: ArtifactKind::Markup,
                path: PathBuf::from(path),
                cause: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
        }
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = ScaffoldReport::default();
        assert!(report.is_success());
        assert_eq!(report.summary(), "Created 0 files");
    }

    #[test]
    fn test_counts_written_and_failed() {
        let report = ScaffoldReport {
            starter: Some(Ok(4)),
            artifacts: vec![ok("a.php"), failed("templates/a.twig"), ok("styles/scss/a.scss")],
        };
        assert_eq!(report.written(), 2);
        assert_eq!(report.failures().len(), 1);
        assert!(!report.is_success());
        assert_eq!(report.summary(), "Created 2 files, 1 failed");
    }

    #[test]
    fn test_starter_failure_listed_first() {
        let report = ScaffoldReport {
            starter: Some(Err(ScaffoldError::StarterCopy {
                origin: "/starter".to_string(),
                destination: PathBuf::from("/theme"),
                cause: io::Error::new(io::ErrorKind::NotFound, "gone"),
            })),
            artifacts: vec![failed("templates/a.twig")],
        };
        let failures = report.failures();
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], ScaffoldError::StarterCopy { .. }));
    }
}
