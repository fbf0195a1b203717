//! `emlextract`: pull metadata, bodies, and attachments out of `.eml` files.
//!
//! The library walks each message's MIME tree, sorting leaf parts into plain
//! text, HTML, and attachments (including attachments that only announce
//! themselves through a `name=` parameter on `Content-Type`), writes the
//! attachments to disk, and builds one [`model::report::ReportEntry`] per file.

pub mod config;
pub mod discover;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod parser;
