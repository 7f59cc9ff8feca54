//! Location of the starter theme tree

use include_dir::{include_dir, Dir};
use std::fmt;
use std::path::PathBuf;

/// Environment variable overriding the starter tree location
pub const STARTER_DIR_ENV: &str = "TIMBER_STARTER_DIR";

/// Starter tree compiled into the binary
pub static BUNDLED_STARTER: Dir = include_dir!("$CARGO_MANIFEST_DIR/starter-theme");

/// Where the starter tree is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StarterSource {
    /// The starter tree embedded in the tool
    #[default]
    Bundled,
    /// A directory picked by the operator
    Local(PathBuf),
}

impl StarterSource {
    /// Resolve the source: explicit directory, then `TIMBER_STARTER_DIR`, then bundled
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let from_env = std::env::var_os(STARTER_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, from_env)
    }

    fn resolve_with(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        match explicit.or(from_env) {
            Some(path) => Self::Local(path),
            None => Self::Bundled,
        }
    }
}

impl fmt::Display for StarterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "the bundled starter theme"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins_over_env() {
        let source = StarterSource::resolve_with(
            Some(PathBuf::from("/explicit")),
            Some(PathBuf::from("/from-env")),
        );
        assert_eq!(source, StarterSource::Local(PathBuf::from("/explicit")));
    }

    #[test]
    fn test_env_used_without_explicit_dir() {
        let source = StarterSource::resolve_with(None, Some(PathBuf::from("/from-env")));
        assert_eq!(source.to_string(), "/from-env");
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let source = StarterSource::resolve_with(None, None);
        assert_eq!(source, StarterSource::Bundled);
        assert_eq!(source.to_string(), "the bundled starter theme");
    }

    #[test]
    fn test_bundled_tree_has_theme_skeleton() {
        assert!(BUNDLED_STARTER.get_file("functions.php").is_some());
        assert!(BUNDLED_STARTER.get_file("templates/base.twig").is_some());
        assert!(BUNDLED_STARTER.get_dir("styles/scss").is_some());
        assert!(BUNDLED_STARTER.get_dir("styles/css").is_some());
    }
}
