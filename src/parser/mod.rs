//! Email parsing: `.eml` loading, raw header handling, and the MIME part view.

pub mod eml;
pub mod header;
pub mod part;
