//! Accumulated result of walking a message's MIME tree.

use std::path::PathBuf;

/// Bodies, written attachments, and the number of leaf parts seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentResult {
    /// Concatenation of every `text/plain` leaf, in tree order.
    pub body_text: String,
    /// Concatenation of every `text/html` leaf, in tree order.
    pub body_html: String,
    /// Paths of the attachment files written, in tree order.
    pub attachments: Vec<PathBuf>,
    /// Number of leaf parts processed, including dropped ones.
    pub total_part: usize,
}

impl ContentResult {
    /// Append `other` after everything already collected.
    pub fn merge(&mut self, other: ContentResult) {
        self.body_text.push_str(&other.body_text);
        self.body_html.push_str(&other.body_html);
        self.attachments.extend(other.attachments);
        self.total_part += other.total_part;
    }

    /// The body to report: HTML when there is any, plain text otherwise.
    pub fn preferred_body(&self) -> &str {
        if self.body_html.is_empty() {
            &self.body_text
        } else {
            &self.body_html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_concatenates_in_order() {
        let mut acc = ContentResult {
            body_text: "one ".to_string(),
            body_html: String::new(),
            attachments: vec![PathBuf::from("a")],
            total_part: 1,
        };
        acc.merge(ContentResult {
            body_text: "two".to_string(),
            body_html: "<p>x</p>".to_string(),
            attachments: vec![PathBuf::from("b")],
            total_part: 2,
        });
        assert_eq!(acc.body_text, "one two");
        assert_eq!(acc.body_html, "<p>x</p>");
        assert_eq!(acc.attachments, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(acc.total_part, 3);
    }

    #[test]
    fn test_preferred_body() {
        let mut content = ContentResult {
            body_text: "plain".to_string(),
            ..Default::default()
        };
        assert_eq!(content.preferred_body(), "plain");
        content.body_html = "<b>rich</b>".to_string();
        assert_eq!(content.preferred_body(), "<b>rich</b>");
    }
}
