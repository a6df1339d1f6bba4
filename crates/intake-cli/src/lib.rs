//! Library side of the `intake` binary: logging, configuration and commands.

pub mod commands;
pub mod config;
pub mod logging;
