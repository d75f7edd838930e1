//! Console front end for the student roster: argument parsing,
//! configuration, logging, input parsing and the interactive menu loop.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod output;
pub mod router;
pub mod shell;

pub use console::{BufferedConsole, Console, EditorConsole};
pub use error::{CliError, CliResult};
pub use menu::MenuChoice;
pub use output::OutputStyle;
pub use shell::Shell;
