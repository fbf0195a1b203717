//! The recursive MIME walk.
//!
//! Every leaf part ends up in exactly one bucket:
//! - a declared attachment (the part carries a file name), written to disk;
//! - `text/plain` or `text/html`, appended to the matching body;
//! - anything else: a "packed file" if its raw `Content-Type` header has a
//!   `name=` parameter (written to disk like an attachment), dropped otherwise.
//!
//! Containers are walked child by child, depth first, and their results are
//! merged in order.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::model::content::ContentResult;
use crate::parser::header::{decode_bytes, packed_file_name};
use crate::parser::part::MimePart;

use super::naming::{save_attachment, AttachmentNamer, TokenGenerator};

/// Walks one message and writes its attachments.
#[derive(Debug)]
pub struct ContentWalker<G> {
    namer: AttachmentNamer<G>,
}

impl<G: TokenGenerator> ContentWalker<G> {
    /// Walker for the message read from `source`; attachments go to `output_dir`.
    pub fn new(source: &Path, output_dir: impl Into<PathBuf>, tokens: G) -> Self {
        Self {
            namer: AttachmentNamer::new(source, output_dir, tokens),
        }
    }

    /// Collect bodies and attachments from `part` and everything below it.
    ///
    /// Fails only when an attachment cannot be written.
    pub fn fetch_content<P: MimePart>(&mut self, part: &P) -> Result<ContentResult> {
        if part.is_multipart() {
            self.parse_multi_part(part)
        } else {
            self.parse_single_part(part)
        }
    }

    fn parse_single_part<P: MimePart>(&mut self, part: &P) -> Result<ContentResult> {
        let mut content = ContentResult::default();

        if let Some(name) = part.filename() {
            let path = self.write_attachment(&name, part.payload())?;
            content.attachments.push(path);
            content.total_part += 1;
            return Ok(content);
        }

        let content_type = part.content_type();
        match content_type.as_str() {
            "text/plain" => content.body_text.push_str(&decode_bytes(part.payload())),
            "text/html" => content.body_html.push_str(&decode_bytes(part.payload())),
            _ => {
                let packed = part
                    .header("content-type")
                    .as_deref()
                    .and_then(packed_file_name);
                match packed {
                    Some(name) => {
                        let path = self.write_attachment(&name, part.payload())?;
                        content.attachments.push(path);
                    }
                    None => debug!(content_type = %content_type, "Dropping part without a name"),
                }
            }
        }

        content.total_part += 1;
        Ok(content)
    }

    fn parse_multi_part<P: MimePart>(&mut self, part: &P) -> Result<ContentResult> {
        let mut content = ContentResult::default();
        let mut index = 0;
        while let Some(child) = part.sub_part(index) {
            content.merge(self.fetch_content(&child)?);
            index += 1;
        }
        debug!(children = index, "Walked container");
        Ok(content)
    }

    fn write_attachment(&mut self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.namer.path_for(name);
        save_attachment(&path, data)?;
        info!(path = %path.display(), size = data.len(), "Wrote attachment");
        Ok(path)
    }
}
