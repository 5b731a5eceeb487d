//! Gantry Core
//!
//! Core types for Gantry, a trigger-and-wait client for Jenkins jobs.
//!
//! This crate contains:
//! - Domain types: build snapshots, terminal results, poll outcomes
//! - DTOs: wire shapes of the Jenkins JSON API

pub mod domain;
pub mod dto;
