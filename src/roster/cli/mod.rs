//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! Running `roster` opens a menu loop:
//!
//! ```text
//! [1] Add employee
//! [2] Remove employee
//! [3] Display all employees
//! [4] Assign employee to a department
//! [5] Show total salary
//! [6] Department summary
//! [7] Exit
//! ```
//!
//! Each prompt re-asks until the answer parses. End of input is treated like
//! choosing exit, so scripted sessions (`roster < script.txt`) finish cleanly.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, menu loop and per-action handlers
//! - `prompt`: Line-oriented prompting with retry
//! - `render`: Tables and messages as strings
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber and event format

mod commands;
mod logging;
mod prompt;
mod render;
mod setup;

pub use commands::run;
