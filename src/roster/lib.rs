//! # Roster Architecture
//!
//! Roster is an in-memory **employee registry library** with a small interactive
//! console client on top. The registry knows nothing about terminals; the binary
//! is one possible UI for it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, retries on malformed input           │
//! │  - Table rendering, colors, logging setup, exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the registry, dispatches to commands                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns registry outcomes into `CmdResult` + messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - Sole owner of `Employee` records, unique ids             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result<CmdResult>`, `bool` or `Option`. It never writes to stdout/stderr
//! and never exits the process. Duplicate ids and unknown ids are ordinary
//! [`error::RosterError`] values the caller is expected to handle.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`registry`]: The employee collection and its invariants
//! - [`model`]: `Employee` and `Department`
//! - [`validation`]: Parsing raw user text into model values
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod validation;
