//! Shared utilities for depcheck.
//!
//! This crate provides the cross-cutting concerns used by all other depcheck
//! crates: the unified error type and terminal progress indicators.

pub mod errors;
pub mod progress;
