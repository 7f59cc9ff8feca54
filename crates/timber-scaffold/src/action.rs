//! Top-level actions offered to the operator

use std::fmt;
use std::str::FromStr;

/// What the operator wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a new theme folder
    Init,
    /// Add pages to an existing theme folder
    Add,
    /// Leave the CLI
    Close,
}

impl Action {
    /// All actions in menu order
    pub const ALL: [Action; 3] = [Action::Init, Action::Add, Action::Close];

    /// Identifier used on the command line
    pub fn value(&self) -> &'static str {
        match self {
            Action::Init => "init",
            Action::Add => "add",
            Action::Close => "close",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Action::Init => "Initialize new project",
            Action::Add => "Add page(s) to existing project",
            Action::Close => "None, close CLI.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown action '{}'. Expected one of: init, add, close", s))
    }
}
