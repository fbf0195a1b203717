//! One entry of the JSON report.

use super::content::ContentResult;
use super::metadata::Metadata;

/// Everything reported for a single input file.
///
/// Fields are declared in alphabetical order so the serialized keys come
/// out sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportEntry {
    /// Paths of the extracted attachment files.
    pub attachments: Vec<String>,
    /// HTML body if the message had one, plain text otherwise.
    pub body: String,
    pub cc: String,
    /// Base name of the input file.
    pub file_name: String,
    pub from: String,
    pub subject: String,
    /// The sanitized `Date:` header.
    pub time: String,
    pub to: String,
}

impl ReportEntry {
    /// Combine the two extractor outputs for the file called `file_name`.
    pub fn new(metadata: Metadata, content: ContentResult, file_name: impl Into<String>) -> Self {
        let body = content.preferred_body().to_string();
        Self {
            attachments: content
                .attachments
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            body,
            cc: metadata.cc,
            file_name: file_name.into(),
            from: metadata.from,
            subject: metadata.subject,
            time: metadata.date,
            to: metadata.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_new_maps_fields() {
        let metadata = Metadata {
            from: "Alice <alice.example.com>".to_string(),
            to: "bob.example.com".to_string(),
            cc: String::new(),
            subject: "Hello World".to_string(),
            date: "Mon 01 Jan 2024 100000 0000".to_string(),
        };
        let content = ContentResult {
            body_text: "hi".to_string(),
            body_html: String::new(),
            attachments: vec![PathBuf::from("mail_AbCdEf_report.pdf")],
            total_part: 2,
        };
        let entry = ReportEntry::new(metadata, content, "mail.eml");
        assert_eq!(entry.body, "hi");
        assert_eq!(entry.time, "Mon 01 Jan 2024 100000 0000");
        assert_eq!(entry.file_name, "mail.eml");
        assert_eq!(entry.attachments, vec!["mail_AbCdEf_report.pdf".to_string()]);
    }

    #[test]
    fn test_serialized_keys_sorted() {
        let json = serde_json::to_string(&ReportEntry::default()).expect("serialize");
        let keys = [
            "\"attachments\"",
            "\"body\"",
            "\"cc\"",
            "\"file_name\"",
            "\"from\"",
            "\"subject\"",
            "\"time\"",
            "\"to\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(k).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }
}
