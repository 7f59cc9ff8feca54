//! Theme layout: file extensions and folders used for generated pages

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Naming convention for the files generated per page
///
/// Can be overridden with a YAML file; every field falls back to the Timber
/// defaults when omitted:
///
/// ```yaml
/// controller_ext: php
/// markup_ext: twig
/// preprocessor_dir: scss
/// style_ext: scss
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayout {
    /// Extension of the page controller in the theme root
    pub controller_ext: String,

    /// Extension of the markup template under `templates/`
    pub markup_ext: String,

    /// Folder under `styles/` holding preprocessor sources
    pub preprocessor_dir: String,

    /// Extension of the stylesheet stub
    pub style_ext: String,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            controller_ext: "php".to_string(),
            markup_ext: "twig".to_string(),
            preprocessor_dir: "scss".to_string(),
            style_ext: "scss".to_string(),
        }
    }
}

impl ThemeLayout {
    /// Parse a layout from YAML
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a layout file
    pub async fn load(path: &Path) -> Result<Self, ScaffoldError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ScaffoldError::Layout {
                path: path.to_path_buf(),
                cause: Box::new(e),
            })?;

        Self::from_yaml(&content).map_err(|e| ScaffoldError::Layout {
            path: path.to_path_buf(),
            cause: Box::new(e),
        })
    }

    /// Load the layout from `path` if given, defaults otherwise
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, ScaffoldError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }
}
