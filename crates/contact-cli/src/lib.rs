//! Contact normalizer command-line components.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
