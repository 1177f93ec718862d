// ABOUTME: Library exports for PDC CLI modules for testing and external use
// ABOUTME: Makes internal modules available to the binary and integration tests

pub mod cli;
pub mod cli_output;
pub mod completions;
pub mod config;
pub mod constants;
pub mod image;
pub mod output;
pub mod types;
