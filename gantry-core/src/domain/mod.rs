//! Core domain types
//!
//! This module contains the domain structures shared between the client and
//! the CLI: the build snapshot fetched from the server, the terminal result
//! classification, and the per-tick poll outcome with its exit-code mapping.

pub mod build;
pub mod outcome;
