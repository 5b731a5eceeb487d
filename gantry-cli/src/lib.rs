//! Gantry CLI
//!
//! Command-line interface for triggering a Jenkins job and waiting for the
//! resulting build. The binary in `main.rs` only parses arguments and
//! installs logging; everything it hands the run logic is a plain
//! configuration value.

pub mod app;
pub mod config;
pub mod params;
