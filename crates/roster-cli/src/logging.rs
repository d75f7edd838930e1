// Logging and verbosity control

use std::sync::atomic::{AtomicU8, Ordering};

/// Global verbosity level
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - level taken from configuration
    Normal = 1,
    /// Verbose mode - debug diagnostics
    Verbose = 2,
}

impl VerbosityLevel {
    /// Get the current verbosity level
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Normal,
            _ => VerbosityLevel::Verbose,
        }
    }

    /// Set the verbosity level
    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// Resolve from the CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// True when `--verbose` is in effect for this process
    pub fn is_verbose() -> bool {
        Self::current() == VerbosityLevel::Verbose
    }

    /// Max tracing level given the configured level
    pub fn max_level(&self, configured: tracing::Level) -> tracing::Level {
        match self {
            VerbosityLevel::Quiet => tracing::Level::ERROR,
            VerbosityLevel::Normal => configured,
            VerbosityLevel::Verbose => std::cmp::max(configured, tracing::Level::DEBUG),
        }
    }
}

/// Initialize logging based on CLI flags and the configured level
///
/// Diagnostics go to stderr so they never interleave with the menu on stdout.
pub fn init_logging(verbose: bool, quiet: bool, configured: tracing::Level) {
    let level = VerbosityLevel::from_flags(verbose, quiet);
    VerbosityLevel::set(level);

    let debug = level == VerbosityLevel::Verbose;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.max_level(configured))
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .with_writer(std::io::stderr)
        .try_init();
}
