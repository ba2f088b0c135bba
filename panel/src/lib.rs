//! Terminal host for the todo panel.
//!
//! Reads commands from a line-oriented input, executes the panel's requests
//! with a blocking `ureq` agent and prints the rendered panel after each
//! command.

pub mod commands;
pub mod host;
pub mod transport;

pub use commands::{config_from_args, Command, CommandError};
pub use host::{Flow, Host};
pub use transport::{Transport, UreqTransport};
