// Command-line parsing and session startup

use std::path::PathBuf;

use clap::Parser;
use roster_domain::Roster;
use tracing::info;

use crate::{
    config::{AppConfig, ConfigManager, Overrides},
    console::{BufferedConsole, Console, EditorConsole},
    error::CliResult,
    logging,
    output::OutputStyle,
    shell::Shell,
};

/// Roster - interactive student record manager
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(bin_name = "roster")]
#[command(about = "Interactive console manager for in-memory student records")]
#[command(
    long_about = "Add, view, edit and delete undergraduate and graduate student records.\n\nRecords live in memory for the duration of the session. Input is read line by line, so a session can also be scripted by piping commands on stdin."
)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: <config dir>/roster/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Start with an empty roster instead of the example students
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            no_seed: self.no_seed,
            no_color: self.no_color,
        }
    }

    /// Load configuration and layer the flags on top
    pub fn resolve_config(&self) -> CliResult<AppConfig> {
        let manager = match &self.config {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new(),
        };
        let config = manager.load()?;
        Ok(config.apply_overrides(self.overrides()))
    }
}

/// Initial roster for a session
pub fn initial_roster(config: &AppConfig) -> Roster {
    if config.seed_examples {
        Roster::with_examples()
    } else {
        Roster::new()
    }
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse the process arguments and run a session
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();
        Self::execute(&cli)
    }

    /// Run a session for already-parsed arguments
    pub fn execute(cli: &Cli) -> CliResult<()> {
        let config = cli.resolve_config()?;
        logging::init_logging(cli.verbose, cli.quiet, config.tracing_level()?);

        let style = OutputStyle::from_mode(config.color);
        if style.use_colors {
            colored::control::set_override(true);
        }

        let roster = initial_roster(&config);
        info!(seeded = config.seed_examples, "starting roster session");

        if atty::is(atty::Stream::Stdin) {
            Self::run_session(roster, EditorConsole::new()?, style)
        } else {
            let stdin = std::io::stdin();
            let console = BufferedConsole::new(stdin.lock(), std::io::stdout());
            Self::run_session(roster, console, style)
        }
    }

    fn run_session<C: Console>(roster: Roster, console: C, style: OutputStyle) -> CliResult<()> {
        let mut shell = Shell::new(roster, console, style);
        shell.run()
    }
}
