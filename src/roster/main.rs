//! # Roster CLI
//!
//! The binary is intentionally thin: the interactive shell lives in `cli/` and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! Everything the shell does goes through [`roster::api::RosterApi`]; the shell
//! owns prompting, retrying on bad input, rendering and exit codes, and nothing
//! it does can break registry invariants.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
