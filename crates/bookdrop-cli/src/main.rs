use bookdrop_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the XDG state file when possible, else to stderr.
    if logging::init().is_err() {
        logging::init_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("bookdrop error: {:#}", err);
        std::process::exit(1);
    }
}
