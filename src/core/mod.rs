//! core
//!
//! Core domain types and plumbing for Codexweave.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoName
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for chronicle artifacts
//! - [`diff`] - Structural diff between tree snapshots
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - All derived output is deterministic

pub mod config;
pub mod diff;
pub mod paths;
pub mod types;
