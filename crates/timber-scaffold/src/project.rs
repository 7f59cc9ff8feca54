//! Project-level inputs: where the theme lives and who it belongs to

use std::path::{Path, PathBuf};

/// Absolute path of the theme folder all generated paths are derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    root: PathBuf,
}

impl ProjectLocation {
    /// Resolve an operator-supplied folder name against `base`
    ///
    /// Absolute folder names are used as-is.
    pub fn resolve(base: &Path, folder: &str) -> Self {
        let folder = Path::new(folder);
        let root = if folder.is_absolute() {
            folder.to_path_buf()
        } else {
            base.join(folder)
        };
        Self { root }
    }

    /// Resolve a folder name against the current working directory
    pub fn from_current_dir(folder: &str) -> std::io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::resolve(&current_dir, folder))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the main theme stylesheet
    pub fn theme_stylesheet(&self) -> PathBuf {
        self.root.join("style.css")
    }
}

impl From<PathBuf> for ProjectLocation {
    fn from(root: PathBuf) -> Self {
        Self { root }
    }
}

impl AsRef<Path> for ProjectLocation {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

/// Theme header values written into `style.css`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeMetadata {
    pub theme_name: String,
    pub author: String,
}

impl ThemeMetadata {
    pub fn new(theme_name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            theme_name: theme_name.into(),
            author: author.into(),
        }
    }
}
