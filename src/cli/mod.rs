//! CLI module
//!
//! Command-line interface for the EasyBroker client.
//!
//! # Commands
//!
//! - `properties` - List every property, one per line
//! - `property` - Show a single property

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
