//! Sanitized header metadata.

/// The five header fields reported for every message.
///
/// Each field is the sanitized header value, or empty if the header was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    /// `From:`
    pub from: String,
    /// `To:`
    pub to: String,
    /// `Cc:`
    pub cc: String,
    /// `Subject:`
    pub subject: String,
    /// `Date:`, kept as text.
    pub date: String,
}
