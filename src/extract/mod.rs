//! Extraction: header metadata, the MIME content walk, attachment naming, and
//! the per-file / per-batch pipeline tying them together.

pub mod batch;
pub mod content;
pub mod metadata;
pub mod naming;

pub use batch::{extract_files, process_file, ExtractOptions};
pub use content::ContentWalker;
pub use metadata::extract_metadata;
pub use naming::{RandomToken, TokenGenerator};
