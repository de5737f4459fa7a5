//! Core data types for depcheck: the dependency tree model, Maven version
//! ordering, ingestion of the host build tool's graph output, and tool
//! configuration.

pub mod config;
pub mod source;
pub mod tree;
pub mod version;
