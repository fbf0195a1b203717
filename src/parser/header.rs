//! Raw header handling: byte decoding, unfolding, and `name=` parameter parsing.

/// Decode raw header or payload bytes to a string.
///
/// Tries UTF-8 first, then falls back to Windows-1252 (which accepts every byte).
pub fn decode_bytes(bytes: &[u8]) -> String {
    // Strip BOM if present
    let bytes = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        bytes
    };

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Unfold a raw header value: continuation lines are joined with a single space.
pub fn unfold(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for line in value.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(trimmed);
    }
    result
}

/// Pull the attachment name out of a `Content-Type` value's `name=` parameter.
///
/// The value runs from `name=` to the next `;` (or the end). Surrounding
/// whitespace is trimmed, then one pair of matching quotes and one pair of
/// angle brackets are removed. Returns `None` when there is no `name=` or
/// nothing is left after stripping.
///
/// # Examples
/// - `application/octet-stream; name="invoice.pdf"` → `invoice.pdf`
/// - `image/png; name=<logo.png>; x-mac-type=0` → `logo.png`
pub fn packed_file_name(content_type: &str) -> Option<String> {
    let start = content_type.find("name=")? + "name=".len();
    let rest = &content_type[start..];
    let raw = match rest.find(';') {
        Some(end) => &rest[..end],
        None => rest,
    };

    let mut name = raw.trim();
    if let Some(inner) = strip_pair(name, '"', '"').or_else(|| strip_pair(name, '\'', '\'')) {
        name = inner;
    }
    if let Some(inner) = strip_pair(name, '<', '>') {
        name = inner;
    }

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Strip exactly one `open … close` pair around `s`, if present.
fn strip_pair(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}
