//! The read-only view of a message node that the extractors work against.
//!
//! [`MimePart`] is implemented by [`MailPart`] on top of `mail-parser`, and by
//! in-memory fakes in tests.

use mail_parser::{Message, MessagePart, MimeHeaders, PartType};

use super::header::{decode_bytes, unfold};

/// One node of a parsed message's MIME tree.
pub trait MimePart: Sized {
    /// Raw value of the first header called `name` (case-insensitive), unfolded.
    fn header(&self, name: &str) -> Option<String>;

    /// `true` if this node is a container (multipart or embedded message).
    fn is_multipart(&self) -> bool;

    /// The child at `index`, or `None` past the last child.
    fn sub_part(&self, index: usize) -> Option<Self>;

    /// Lowercase `type/subtype`, `text/plain` when the header is missing or
    /// has no subtype.
    fn content_type(&self) -> String;

    /// The declared attachment file name, if any.
    fn filename(&self) -> Option<String>;

    /// Transfer-decoded payload bytes.
    fn payload(&self) -> &[u8];
}

/// A [`MimePart`] backed by a `mail_parser::Message`.
///
/// Header offsets are relative to the message that owns the part, so the
/// owning message travels along with it (embedded `message/rfc822` parts
/// switch to their own message).
#[derive(Debug, Clone, Copy)]
pub struct MailPart<'a> {
    message: &'a Message<'a>,
    part: &'a MessagePart<'a>,
}

impl<'a> MailPart<'a> {
    /// The root part of `message`, carrying the message's own headers.
    pub fn root(message: &'a Message<'a>) -> Option<Self> {
        message.part(0).map(|part| Self { message, part })
    }
}

impl<'a> MimePart for MailPart<'a> {
    fn header(&self, name: &str) -> Option<String> {
        let raw = self.message.raw_message();
        self.part
            .headers
            .iter()
            .find(|h| h.name.as_str().eq_ignore_ascii_case(name))
            .map(|h| {
                raw.get(h.offset_start..h.offset_end)
                    .map(|bytes| unfold(&decode_bytes(bytes)))
                    .unwrap_or_default()
            })
    }

    fn is_multipart(&self) -> bool {
        matches!(
            self.part.body,
            PartType::Multipart(_) | PartType::Message(_)
        )
    }

    fn sub_part(&self, index: usize) -> Option<Self> {
        let part: &'a MessagePart<'a> = self.part;
        match &part.body {
            PartType::Multipart(ids) => {
                let id = *ids.get(index)?;
                self.message.part(id).map(|child| Self {
                    message: self.message,
                    part: child,
                })
            }
            PartType::Message(nested) if index == 0 => Self::root(nested),
            _ => None,
        }
    }

    fn content_type(&self) -> String {
        self.part
            .content_type()
            .and_then(|ct| {
                let sub = ct.subtype().filter(|sub| !sub.is_empty())?;
                if ct.ctype().is_empty() {
                    return None;
                }
                Some(format!("{}/{}", ct.ctype(), sub).to_lowercase())
            })
            .unwrap_or_else(|| "text/plain".to_string())
    }

    fn filename(&self) -> Option<String> {
        self.part
            .attachment_name()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
    }

    fn payload(&self) -> &[u8] {
        self.part.contents()
    }
}
