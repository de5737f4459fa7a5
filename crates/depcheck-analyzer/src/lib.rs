//! Dependency hygiene detectors for resolved dependency trees: snapshot
//! scanning and version conflict grouping.
//!
//! Both detectors are pure: they walk an immutable [`depcheck_core::tree::DependencyTree`]
//! and return a report value. Running a detector twice on the same tree
//! yields identical ordered output.

pub mod conflicts;
pub mod snapshot;
