//! Per-file and per-batch extraction.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ExtractError, Result};
use crate::model::report::ReportEntry;
use crate::parser::eml::{parse_message, read_eml};
use crate::parser::part::MailPart;

use super::content::ContentWalker;
use super::metadata::extract_metadata;
use super::naming::TokenGenerator;

/// Knobs shared by every file of a batch.
///
/// The default writes attachments under bare relative names, i.e. into the
/// current directory, and aborts on the first failure.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Directory receiving the attachment files (empty for the current one).
    pub output_dir: PathBuf,
    /// Log and skip failing files instead of aborting the batch.
    pub keep_going: bool,
}

/// Extract one `.eml` file into a report entry, writing its attachments.
pub fn process_file<G: TokenGenerator>(
    path: &Path,
    options: &ExtractOptions,
    tokens: &mut G,
) -> Result<ReportEntry> {
    let data = read_eml(path)?;
    let message = parse_message(&data, path)?;
    let root = MailPart::root(&message).ok_or_else(|| ExtractError::Parse(path.to_path_buf()))?;

    let metadata = extract_metadata(&root);
    let content = ContentWalker::new(path, &options.output_dir, tokens).fetch_content(&root)?;

    info!(
        file = %path.display(),
        parts = content.total_part,
        attachments = content.attachments.len(),
        "Extracted message"
    );

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ReportEntry::new(metadata, content, file_name))
}

/// Extract every file in order.
///
/// `progress` is called with `(done, total)` before each file and once at
/// the end. Without `keep_going` the first failure aborts the batch.
/// An empty `files` is [`ExtractError::NoEmailFiles`].
pub fn extract_files<G: TokenGenerator>(
    files: &[PathBuf],
    options: &ExtractOptions,
    tokens: &mut G,
    progress: &dyn Fn(usize, usize),
) -> Result<Vec<ReportEntry>> {
    if files.is_empty() {
        return Err(ExtractError::NoEmailFiles);
    }

    let total = files.len();
    let mut entries = Vec::with_capacity(total);

    for (i, file) in files.iter().enumerate() {
        progress(i, total);
        match process_file(file, options, tokens) {
            Ok(entry) => entries.push(entry),
            Err(e) if options.keep_going => {
                warn!(file = %file.display(), error = %e, "Skipping file");
            }
            Err(e) => return Err(e),
        }
    }
    progress(total, total);

    Ok(entries)
}
