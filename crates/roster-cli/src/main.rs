// Roster CLI entry point

use roster_cli::{logging::VerbosityLevel, output, router::CommandRouter};

fn main() {
    let result = CommandRouter::route();

    // Exit with appropriate code
    if let Err(e) = result {
        tracing::error!(error = %e, details = %e.technical_details(), "session aborted");
        output::print_error(&e.user_message());
        if VerbosityLevel::is_verbose() {
            output::print_error(&e.technical_details());
        }
        std::process::exit(1);
    }
}
