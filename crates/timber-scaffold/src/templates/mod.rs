//! Theme file content and the starter tree
//!
//! This module provides:
//! - Text rendering for the theme stylesheet header, page controllers and page templates
//! - Starter tree location (bundled, environment override, or explicit directory)
//! - Recursive starter tree copying

pub mod content;
pub mod copier;
pub mod starter;

pub use content::{render_controller, render_markup, render_stylesheet_header, BASE_LAYOUT};
pub use copier::copy_starter_tree;
pub use starter::{StarterSource, BUNDLED_STARTER, STARTER_DIR_ENV};
