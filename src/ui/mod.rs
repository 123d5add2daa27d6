//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! All command output goes through this module so quiet and debug modes
//! are handled consistently. Errors always go to stderr.

pub mod output;
