//! timber-tools CLI - Theme and page scaffolding for Timber

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use timber_scaffold::tui::ThemeArgs;
use timber_scaffold::{
    parse_page_names, Action, ProjectLocation, ScaffoldError, ScaffoldReport, Scaffolder,
    StarterSource, ThemeLayout, ThemeMetadata,
};

#[derive(Parser, Debug)]
#[command(name = "timber-tools")]
#[command(about = "CLI for scaffolding Timber themes and pages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new theme folder from the starter theme
    Init(InitArgs),
    /// Add page(s) to an existing theme folder
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Theme folder to create, relative to the current directory
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Theme name written into style.css
    #[arg(long = "theme-name")]
    pub theme_name: Option<String>,

    /// Theme author written into style.css
    #[arg(short, long)]
    pub author: Option<String>,

    /// Page names separated by spaces (e.g. "home about contact")
    #[arg(short, long)]
    pub pages: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Existing theme folder, relative to the current directory
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Page names separated by spaces (e.g. "home about contact")
    #[arg(short, long)]
    pub pages: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CommonArgs {
    /// Starter theme directory to copy instead of the bundled one (overrides TIMBER_STARTER_DIR)
    #[arg(long = "starter-dir")]
    pub starter_dir: Option<PathBuf>,

    /// YAML file overriding page file extensions and the style source folder
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Plain output without prompts; missing values are left empty
    #[arg(long)]
    pub plain: bool,
}

impl From<InitArgs> for ThemeArgs {
    fn from(args: InitArgs) -> Self {
        ThemeArgs {
            action: Some(Action::Init),
            folder: args.folder,
            theme_name: args.theme_name,
            author: args.author,
            pages: args.pages,
            starter_dir: args.common.starter_dir,
            layout: args.common.layout,
        }
    }
}

impl From<AddArgs> for ThemeArgs {
    fn from(args: AddArgs) -> Self {
        ThemeArgs {
            action: Some(Action::Add),
            folder: args.folder,
            pages: args.pages,
            starter_dir: args.common.starter_dir,
            layout: args.common.layout,
            ..ThemeArgs::default()
        }
    }
}

impl Command {
    fn is_plain(&self) -> bool {
        match self {
            Command::Init(args) => args.common.plain,
            Command::Add(args) => args.common.plain,
        }
    }
}

/// Run a subcommand without prompts, printing progress as plain lines
async fn run_plain(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => {
            let folder = args
                .folder
                .context("--folder is required together with --plain")?;
            let scaffolder = plain_scaffolder(&args.common).await?;
            let location = ProjectLocation::from_current_dir(&folder)
                .context("Failed to read current directory")?;
            let starter = StarterSource::resolve(args.common.starter_dir);
            let metadata = ThemeMetadata::new(
                args.theme_name.unwrap_or_default(),
                args.author.unwrap_or_default(),
            );
            let pages = parse_page_names(args.pages.as_deref().unwrap_or_default());

            println!(
                "{}",
                format!("Creating theme in {}...", location.root().display())
                    .cyan()
                    .bold()
            );
            let report = scaffolder
                .bootstrap(&location, &metadata, &starter, &pages)
                .await;
            print_summary(&report);
            Ok(())
        }
        Command::Add(args) => {
            let folder = args
                .folder
                .context("--folder is required together with --plain")?;
            let scaffolder = plain_scaffolder(&args.common).await?;
            let location = ProjectLocation::from_current_dir(&folder)
                .context("Failed to read current directory")?;
            let pages = parse_page_names(args.pages.as_deref().unwrap_or_default());

            match scaffolder.extend(&location, &pages).await {
                Ok(report) => print_summary(&report),
                // Already reported; nothing was written
                Err(ScaffoldError::FolderMissing { .. }) => {}
                Err(e) => return Err(e.into()),
            }
            Ok(())
        }
    }
}

async fn plain_scaffolder(common: &CommonArgs) -> Result<Scaffolder> {
    let layout = ThemeLayout::load_or_default(common.layout.as_deref()).await?;
    Ok(Scaffolder::new(layout))
}

fn print_summary(report: &ScaffoldReport) {
    println!();
    if report.is_success() {
        println!("{}", report.summary().green().bold());
    } else {
        println!("{}", report.summary().yellow().bold());
    }
}

/// Map the run result to an exit status
///
/// Prompt failures are printed here once and end with a status code; every
/// other error is handed back to anyhow.
fn handle_result(result: Result<()>) -> Result<u8> {
    let Err(err) = result else {
        return Ok(0);
    };

    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::Prompt { cause, .. })
            if cause.kind() == std::io::ErrorKind::Interrupted =>
        {
            Ok(130)
        }
        Some(prompt @ ScaffoldError::Prompt { .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), prompt);
            Ok(1)
        }
        _ => Err(err),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Some(command) if command.is_plain() => run_plain(command).await,
        Some(Command::Init(init_args)) => timber_scaffold::run(init_args.into()).await,
        Some(Command::Add(add_args)) => timber_scaffold::run(add_args.into()).await,
        // No subcommand provided, show the action menu
        None => timber_scaffold::run(ThemeArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    handle_result(result).map(ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_menu() {
        let args = Args::try_parse_from(["timber-tools"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_init_args_convert() {
        let args = Args::try_parse_from([
            "timber-tools",
            "init",
            "--folder",
            "acme",
            "--theme-name",
            "Acme",
            "--author",
            "J. Doe",
            "--pages",
            "home about",
        ])
        .unwrap();

        let Some(Command::Init(init)) = args.command else {
            panic!("expected init");
        };
        assert!(!init.common.plain);
        let theme: ThemeArgs = init.into();
        assert_eq!(theme.action, Some(Action::Init));
        assert_eq!(theme.folder.as_deref(), Some("acme"));
        assert_eq!(theme.author.as_deref(), Some("J. Doe"));
        assert_eq!(theme.pages.as_deref(), Some("home about"));
    }

    #[test]
    fn test_add_args_with_plain_and_layout() {
        let args = Args::try_parse_from([
            "timber-tools",
            "add",
            "-f",
            "acme",
            "-p",
            "blog",
            "--plain",
            "--layout",
            "layout.yaml",
        ])
        .unwrap();

        let command = args.command.unwrap();
        assert!(command.is_plain());
        let Command::Add(add) = command else {
            panic!("expected add");
        };
        let theme: ThemeArgs = add.into();
        assert_eq!(theme.action, Some(Action::Add));
        assert_eq!(theme.layout, Some(PathBuf::from("layout.yaml")));
        assert!(theme.theme_name.is_none());
    }

    #[test]
    fn test_prompt_error_exits_with_failure_code() {
        let err = ScaffoldError::prompt("folder name", std::io::Error::other("not a terminal"));
        assert_eq!(handle_result(Err(err.into())).unwrap(), 1);
    }

    #[test]
    fn test_interrupted_prompt_exits_130() {
        let cause = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        let err = ScaffoldError::prompt("action", cause);
        assert_eq!(handle_result(Err(err.into())).unwrap(), 130);
    }

    #[test]
    fn test_other_errors_are_propagated() {
        let err = ScaffoldError::FolderMissing {
            path: PathBuf::from("/nowhere/acme"),
        };
        let result = handle_result(Err(anyhow::Error::new(err).context("add failed")));
        assert!(result.is_err());
    }

    #[test]
    fn test_ok_result_exits_zero() {
        assert_eq!(handle_result(Ok(())).unwrap(), 0);
    }
}
