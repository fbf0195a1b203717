//! Core data model types: extracted metadata, walked content, and report entries.

pub mod content;
pub mod metadata;
pub mod report;
