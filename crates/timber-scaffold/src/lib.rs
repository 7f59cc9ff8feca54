//! Timber Scaffold - library behind the `timber-tools` CLI
//!
//! Builds Timber (Twig on WordPress) themes: a new theme folder from a starter
//! tree, or extra pages in an existing one. Each page gets a PHP controller, a
//! Twig template and an empty stylesheet stub, all sharing the page's name.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure content rendering, starter tree copying, artifact writing
//! - **Layer 2: Workflow Orchestration** - `Scaffolder` (page scaffolding, bootstrap, extend) and `Reporter`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use timber_scaffold::{parse_page_names, ProjectLocation, Scaffolder, ThemeLayout};
//!
//! let scaffolder = Scaffolder::new(ThemeLayout::default());
//! let location = ProjectLocation::from_current_dir("my-theme")?;
//! let report = scaffolder
//!     .extend(&location, &parse_page_names("about contact"))
//!     .await?;
//! println!("{}", report.summary());
//! ```

pub mod action;
pub mod error;
pub mod layout;
pub mod pages;
pub mod project;
pub mod report;
pub mod scaffolder;
pub mod templates;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use action::Action;
pub use error::ScaffoldError;
pub use layout::ThemeLayout;
pub use pages::{parse_page_names, PageArtifactSet};
pub use project::{ProjectLocation, ThemeMetadata};
pub use report::{ConsoleReporter, Reporter, ScaffoldReport, SilentReporter};
pub use scaffolder::Scaffolder;
pub use templates::StarterSource;
pub use writer::{ArtifactKind, ArtifactOutcome, ArtifactWriter, FsArtifactWriter};

#[cfg(feature = "tui")]
pub use tui::run;
