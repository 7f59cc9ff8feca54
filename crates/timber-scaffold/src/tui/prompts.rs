//! Charm-style CLI prompts using cliclack

use crate::action::Action;
use crate::error::ScaffoldError;
use crate::layout::ThemeLayout;
use crate::pages::parse_page_names;
use crate::project::{ProjectLocation, ThemeMetadata};
use crate::report::{Reporter, ScaffoldReport};
use crate::scaffolder::Scaffolder;
use crate::templates::StarterSource;
use crate::writer::{ArtifactOutcome, FsArtifactWriter};
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Values that can be given up front instead of prompted for
#[derive(Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Action to run; the menu is shown when absent
    pub action: Option<Action>,

    /// Theme folder, relative to the current directory
    pub folder: Option<String>,

    /// Theme name for the `style.css` header
    pub theme_name: Option<String>,

    /// Theme author for the `style.css` header
    pub author: Option<String>,

    /// Space-separated page names
    pub pages: Option<String>,

    /// Starter tree to copy instead of the bundled one
    pub starter_dir: Option<PathBuf>,

    /// YAML file overriding file extensions and style folders
    pub layout: Option<PathBuf>,
}

/// Progress output through cliclack's log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackReporter;

impl Reporter for CliclackReporter {
    fn starter_copied(&self, destination: &Path, files: usize) {
        let message = format!(
            "Starter theme copied successfully! ({} files in {})",
            files,
            destination.display()
        );
        let result = cliclack::log::success(&message);
        stderr_fallback(&message, result);
    }

    fn artifact(&self, outcome: &ArtifactOutcome) {
        match &outcome.result {
            Ok(()) => {
                let message = format!("Created: {}", outcome.path.display());
                let result = cliclack::log::success(&message);
                stderr_fallback(&message, result);
            }
            Err(e) => {
                let message = e.to_string();
                let result = cliclack::log::error(&message);
                stderr_fallback(&message, result);
            }
        }
    }

    fn failure(&self, error: &ScaffoldError) {
        let message = error.to_string();
        let result = cliclack::log::error(&message);
        stderr_fallback(&message, result);
    }

    fn note(&self, message: &str) {
        let result = cliclack::log::info(message);
        stderr_fallback(message, result);
    }
}

/// Print `message` on stderr when the cliclack line could not be drawn
///
/// Returns the line that was printed, if any.
fn stderr_fallback(message: &str, result: io::Result<()>) -> Option<String> {
    let err = result.err()?;
    let line = format!("{} (terminal output failed: {})", message, err);
    eprintln!("{}", line);
    Some(line)
}

/// Run the CLI with interactive prompts
pub async fn run(args: ThemeArgs) -> Result<()> {
    cliclack::intro("Timber theme scaffolder")?;

    let action = match args.action {
        Some(action) => action,
        None => select_action()?,
    };

    match action {
        Action::Init => init_theme(&args).await,
        Action::Add => add_pages(&args).await,
        Action::Close => {
            cliclack::outro("Bye!")?;
            std::process::exit(0);
        }
    }
}

fn select_action() -> Result<Action, ScaffoldError> {
    let mut select = cliclack::select("Which functionality would you like to use now?");
    for action in Action::ALL {
        select = select.item(action, action.label(), "");
    }

    select
        .interact()
        .map_err(|e| ScaffoldError::prompt("action", e))
}

async fn init_theme(args: &ThemeArgs) -> Result<()> {
    // Gather every answer before touching the filesystem
    let folder = ask_folder(args)?;
    let theme_name = ask_optional(
        "theme name",
        "What's your theme's name?",
        args.theme_name.as_deref(),
    )?;
    let author = ask_optional("author", "Who is the author?", args.author.as_deref())?;
    let pages = ask_pages(args)?;

    let scaffolder = scaffolder(args).await?;
    let location =
        ProjectLocation::from_current_dir(&folder).context("Failed to read current directory")?;
    let starter = StarterSource::resolve(args.starter_dir.clone());

    cliclack::log::info(format!("Using starter theme from {}", starter))?;

    let report = scaffolder
        .bootstrap(
            &location,
            &ThemeMetadata::new(theme_name, author),
            &starter,
            &pages,
        )
        .await;

    print_next_steps(&location, scaffolder.layout());
    finish(&report)
}

async fn add_pages(args: &ThemeArgs) -> Result<()> {
    let folder = ask_folder(args)?;
    let pages = ask_pages(args)?;

    let scaffolder = scaffolder(args).await?;
    let location =
        ProjectLocation::from_current_dir(&folder).context("Failed to read current directory")?;

    match scaffolder.extend(&location, &pages).await {
        Ok(report) => finish(&report),
        Err(ScaffoldError::FolderMissing { .. }) => {
            cliclack::outro_cancel("No pages were added.")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn scaffolder(
    args: &ThemeArgs,
) -> Result<Scaffolder<FsArtifactWriter, CliclackReporter>, ScaffoldError> {
    if let Some(path) = &args.layout {
        cliclack::log::info(format!("Using layout from {}", path.display()))
            .map_err(|e| ScaffoldError::prompt("layout", e))?;
    }
    let layout = ThemeLayout::load_or_default(args.layout.as_deref()).await?;
    Ok(Scaffolder::new(layout).with_reporter(CliclackReporter))
}

fn ask_folder(args: &ThemeArgs) -> Result<String, ScaffoldError> {
    if let Some(folder) = &args.folder {
        cliclack::log::info(format!("Using folder: {}", folder))
            .map_err(|e| ScaffoldError::prompt("folder name", e))?;
        return Ok(folder.clone());
    }

    cliclack::input("What's the name of your template's folder?")
        .placeholder("my-theme")
        .interact()
        .map_err(|e| ScaffoldError::prompt("folder name", e))
}

fn ask_optional(
    step: &'static str,
    prompt: &str,
    given: Option<&str>,
) -> Result<String, ScaffoldError> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    cliclack::input(prompt)
        .required(false)
        .interact()
        .map_err(|e| ScaffoldError::prompt(step, e))
}

fn ask_pages(args: &ThemeArgs) -> Result<Vec<String>, ScaffoldError> {
    let input = ask_optional(
        "pages",
        "Give the names of all the pages you want to create separated by space character (\" \")",
        args.pages.as_deref(),
    )?;
    Ok(parse_page_names(&input))
}

fn print_next_steps(location: &ProjectLocation, layout: &ThemeLayout) {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    // Step 1: cd to directory if not current
    if current.as_deref() != Some(location.root()) {
        steps.push(format!("cd {}", location.root().display()));
    }
    steps.push(format!(
        "Compile styles/{} into styles/css",
        layout.preprocessor_dir
    ));
    steps.push("Activate the theme under Appearance > Themes".to_string());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
}

fn finish(report: &ScaffoldReport) -> Result<()> {
    if report.is_success() {
        cliclack::outro(report.summary())?;
    } else {
        cliclack::outro_cancel(report.summary())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_fallback_silent_when_drawn() {
        assert_eq!(stderr_fallback("Created: acme/home.php", Ok(())), None);
    }

    #[test]
    fn test_stderr_fallback_keeps_message_on_terminal_error() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let line = stderr_fallback("Created: acme/home.php", Err(err)).unwrap();
        assert_eq!(line, "Created: acme/home.php (terminal output failed: pipe closed)");
    }
}
