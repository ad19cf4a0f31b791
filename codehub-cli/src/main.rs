//! Coding Hub - a terminal directory of languages, tutorials, tools and communities
//!
//! Every page command renders through the core filter engine and records the
//! page as the one to show next time `codehub` is run without arguments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codehub_core::catalog::{Catalog, Difficulty};
use codehub_core::config::HubConfig;
use codehub_core::page::{FileSlot, Page};
use codehub_core::selection::{LanguageSelection, ToolSelection, TutorialSelection};

mod page_cli;

use page_cli::PageController;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "codehub",
    about = "Browse programming languages, tutorials, developer tools and communities",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Use this catalog file instead of the built-in catalog
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override where the current page is remembered
    #[clap(long, global = true)]
    state_file: Option<PathBuf>,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the last viewed page (default)
    Show,

    /// Show the welcome page
    Home,

    /// List programming languages
    Languages {
        /// Search name, description and category (case-insensitive);
        /// several words are searched as one phrase
        #[clap(num_args = 1..)]
        query: Vec<String>,

        /// Include example syntax
        #[clap(long)]
        syntax: bool,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List tutorials
    Tutorials {
        /// Only show one level (beginner, intermediate, advanced)
        #[clap(long, short)]
        difficulty: Option<Difficulty>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List developer tools
    Tools {
        /// Only show one category (exact match, see `codehub categories`)
        #[clap(long, short)]
        category: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the tool categories available as filters
    Categories {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List developer communities
    Community {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the active catalog as YAML
    Export,

    /// Check a catalog file for errors
    Validate {
        /// Path to catalog.yaml
        path: PathBuf,
    },
}

/// Initialize tracing with CLI flags
///
/// `RUST_LOG` directives are layered on top of --log-level.
fn initialize_tracing(log_level: &LogLevel) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if let Ok(env_directives) = std::env::var("RUST_LOG") {
        for directive in env_directives.split(',').filter(|d| !d.is_empty()) {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => HubConfig::load_from_path(path),
        None => HubConfig::load(),
    }
    .context("Failed to load configuration")?
    .with_overrides(cli.catalog, cli.state_file);

    let command = cli.command.unwrap_or(Command::Show);
    debug!(?command, ?config, "Running command");

    if let Command::Validate { path } = &command {
        return validate_command(path);
    }

    let catalog = config.catalog().context("Failed to load catalog")?;

    if let Command::Export = command {
        let yaml = catalog.to_yaml().context("Failed to serialize catalog")?;
        print!("{yaml}");
        return Ok(());
    }

    let state_file = config
        .state_file_path()
        .context("Failed to locate state file")?;
    let slot = FileSlot::new(state_file);
    debug!(state_file = %slot.path().display(), "Using page state");
    let mut controller = PageController::new(&catalog, slot);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Show => {
            let page = controller.current_page();
            controller.render(page, false, &mut out)?;
        }
        Command::Home => {
            controller.navigate(Page::Home)?;
            controller.render_home(&mut out)?;
        }
        Command::Languages {
            query,
            syntax,
            json,
        } => {
            controller.navigate(Page::Languages)?;
            let mut selection = LanguageSelection::new();
            if !query.is_empty() {
                selection.set_search_term(query.join(" "));
            }
            controller.render_languages(&selection, json, syntax, &mut out)?;
        }
        Command::Tutorials { difficulty, json } => {
            controller.navigate(Page::Tutorials)?;
            let mut selection = TutorialSelection::new();
            selection.set_selected_difficulty(difficulty);
            controller.render_tutorials(&selection, json, &mut out)?;
        }
        Command::Tools { category, json } => {
            controller.navigate(Page::Tools)?;
            let mut selection = ToolSelection::new();
            selection.set_selected_category(category);
            controller.render_tools(&selection, json, &mut out)?;
        }
        Command::Categories { json } => {
            controller.navigate(Page::Tools)?;
            controller.render_categories(json, &mut out)?;
        }
        Command::Community { json } => {
            controller.navigate(Page::Community)?;
            controller.render_community(json, &mut out)?;
        }
        Command::Export | Command::Validate { .. } => {}
    }

    out.flush()?;
    Ok(())
}

fn validate_command(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path)
        .with_context(|| format!("Catalog {} is invalid", path.display()))?;

    let summary = catalog.summary();
    println!("Catalog {} is valid", path.display());
    println!(
        "  {} languages, {} tutorials, {} tools, {} communities",
        summary.languages, summary.tutorials, summary.tools, summary.communities
    );
    Ok(())
}
