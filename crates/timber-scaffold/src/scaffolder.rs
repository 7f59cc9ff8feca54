//! Page scaffolding, project bootstrap and page extension
//!
//! Every write goes through [`write_artifact`], which turns failures into
//! outcomes. Pages and their files are handled one after the other so the
//! progress output and the recorded outcomes always follow input order.

use crate::error::ScaffoldError;
use crate::layout::ThemeLayout;
use crate::pages::PageArtifactSet;
use crate::project::{ProjectLocation, ThemeMetadata};
use crate::report::{ConsoleReporter, Reporter, ScaffoldReport};
use crate::templates::{content, copier, StarterSource};
use crate::writer::{
    write_artifact, ArtifactKind, ArtifactOutcome, ArtifactWriter, FsArtifactWriter,
};
use std::path::{Path, PathBuf};

/// Drives the scaffolding of a theme folder
pub struct Scaffolder<W = FsArtifactWriter, R = ConsoleReporter> {
    layout: ThemeLayout,
    writer: W,
    reporter: R,
}

impl Scaffolder {
    /// Scaffolder writing to disk and printing to the terminal
    pub fn new(layout: ThemeLayout) -> Self {
        Self {
            layout,
            writer: FsArtifactWriter,
            reporter: ConsoleReporter,
        }
    }
}

impl<W: ArtifactWriter, R: Reporter> Scaffolder<W, R> {
    /// Build a scaffolder from explicit parts
    pub fn with_parts(layout: ThemeLayout, writer: W, reporter: R) -> Self {
        Self {
            layout,
            writer,
            reporter,
        }
    }

    /// Swap the reporter, keeping layout and writer
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> Scaffolder<W, R2> {
        Scaffolder {
            layout: self.layout,
            writer: self.writer,
            reporter,
        }
    }

    pub fn layout(&self) -> &ThemeLayout {
        &self.layout
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    async fn write(&self, kind: ArtifactKind, path: PathBuf, contents: &str) -> ArtifactOutcome {
        let outcome = write_artifact(&self.writer, kind, path, contents).await;
        self.reporter.artifact(&outcome);
        outcome
    }

    /// Write controller, markup and stylesheet stub for each page, in order
    ///
    /// Always makes three write attempts per page. A failed write is recorded
    /// and the remaining files and pages are still attempted.
    pub async fn scaffold_pages<S: AsRef<str>>(
        &self,
        root: &Path,
        pages: &[S],
    ) -> Vec<ArtifactOutcome> {
        let mut outcomes = Vec::with_capacity(pages.len() * 3);

        for page in pages {
            let page = page.as_ref();
            let set = PageArtifactSet::new(root, page, &self.layout);

            outcomes.push(
                self.write(
                    ArtifactKind::Controller,
                    set.controller,
                    &content::render_controller(page),
                )
                .await,
            );
            outcomes.push(
                self.write(ArtifactKind::Markup, set.markup, &content::render_markup(page))
                    .await,
            );
            // Stylesheet stubs start out empty
            outcomes.push(self.write(ArtifactKind::Stylesheet, set.stylesheet, "").await);
        }

        outcomes
    }

    /// Create a new theme: starter tree, `style.css` header, then pages
    ///
    /// A failed starter copy is reported and the remaining steps still run.
    pub async fn bootstrap<S: AsRef<str>>(
        &self,
        location: &ProjectLocation,
        metadata: &ThemeMetadata,
        starter: &StarterSource,
        pages: &[S],
    ) -> ScaffoldReport {
        let root = location.root();
        let mut report = ScaffoldReport::default();

        let copied = copier::copy_starter_tree(starter, root).await;
        match &copied {
            Ok(files) => self.reporter.starter_copied(root, *files),
            Err(e) => self.reporter.failure(e),
        }
        report.starter = Some(copied);

        let header = content::render_stylesheet_header(&metadata.theme_name, &metadata.author);
        report.artifacts.push(
            self.write(
                ArtifactKind::ThemeStylesheet,
                location.theme_stylesheet(),
                &header,
            )
            .await,
        );

        report.artifacts.extend(self.scaffold_pages(root, pages).await);

        report
    }

    /// Add pages to an existing theme folder
    ///
    /// Fails with [`ScaffoldError::FolderMissing`] before writing anything if
    /// the folder has not been created yet.
    pub async fn extend<S: AsRef<str>>(
        &self,
        location: &ProjectLocation,
        pages: &[S],
    ) -> Result<ScaffoldReport, ScaffoldError> {
        let root = location.root();

        let is_dir = tokio::fs::metadata(root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            let err = ScaffoldError::FolderMissing {
                path: root.to_path_buf(),
            };
            self.reporter.failure(&err);
            self.reporter.note("Make sure you've your template initialized.");
            return Err(err);
        }

        Ok(ScaffoldReport {
            starter: None,
            artifacts: self.scaffold_pages(root, pages).await,
        })
    }
}
