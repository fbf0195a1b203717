//! Header metadata extraction and sanitizing.

use crate::model::metadata::Metadata;
use crate::parser::part::MimePart;

/// Characters removed from every metadata value.
const SPECIAL_CHARACTERS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '/', ':', ';', '=', '?', '@',
    '[', ']', '^', '`', '{', '|', '}', '~',
];

/// Read `Date`, `From`, `To`, `Cc` and `Subject` from `part` and sanitize them.
///
/// Missing headers come back as empty strings. Never fails.
pub fn extract_metadata<P: MimePart>(part: &P) -> Metadata {
    let field = |name: &str| {
        let value = part.header(name);
        sanitize_value(value.as_deref().map(str::trim)).unwrap_or_default()
    };

    Metadata {
        date: field("date"),
        from: field("from"),
        to: field("to"),
        cc: field("cc"),
        subject: field("subject"),
    }
}

/// Sanitize an optional header value. `None` stays `None`.
pub fn sanitize_value(value: Option<&str>) -> Option<String> {
    value.map(remove_special_characters)
}

/// Remove the characters in [`SPECIAL_CHARACTERS`], keeping everything else.
///
/// `<`, `>`, `.`, `-`, `_`, whitespace and non-ASCII text survive.
pub fn remove_special_characters(input: &str) -> String {
    input
        .chars()
        .filter(|c| !SPECIAL_CHARACTERS.contains(c))
        .collect()
}
