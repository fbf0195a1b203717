//! Attachment file naming and the write primitive.
//!
//! Names look like `{stem}_{token}_{attachment}`: the source file's stem,
//! a six-letter random token, and the attachment's own name. The token only
//! has to keep names apart across attachments and runs; it is not a secret.

use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ExtractError, Result};

/// Length of the random token inserted into attachment names.
pub const TOKEN_LENGTH: usize = 6;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Source of the tokens that keep attachment file names apart.
pub trait TokenGenerator {
    /// Produce the next token.
    fn next_token(&mut self) -> String;
}

/// Random ASCII-letter tokens drawn from an owned RNG.
#[derive(Debug, Clone)]
pub struct RandomToken {
    rng: StdRng,
}

impl RandomToken {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomToken {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenGenerator + ?Sized> TokenGenerator for &mut T {
    fn next_token(&mut self) -> String {
        (**self).next_token()
    }
}

impl TokenGenerator for RandomToken {
    fn next_token(&mut self) -> String {
        (0..TOKEN_LENGTH)
            .map(|_| char::from(LETTERS[self.rng.gen_range(0..LETTERS.len())]))
            .collect()
    }
}

/// The part of `source`'s file name before its first `.`.
///
/// `/mail/inbox/2024.01.report.eml` → `2024`
pub fn source_stem(source: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Build `{stem}_{token}_{name}`, neutralizing path separators in `name`.
pub fn attachment_file_name(stem: &str, token: &str, name: &str) -> String {
    format!("{stem}_{token}_{}", sanitize_attachment_name(name))
}

/// Replace characters that would let a name leave its directory.
fn sanitize_attachment_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Create `path` (it must not exist yet) and write `data` to it.
pub fn save_attachment(path: &Path, data: &[u8]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(data)?;
        file.flush()
    };
    write().map_err(|source| ExtractError::AttachmentWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Turns attachment names into unique paths under one output directory.
#[derive(Debug, Clone)]
pub struct AttachmentNamer<G> {
    output_dir: PathBuf,
    stem: String,
    tokens: G,
}

impl<G: TokenGenerator> AttachmentNamer<G> {
    /// Namer for attachments of `source`, written into `output_dir`.
    pub fn new(source: &Path, output_dir: impl Into<PathBuf>, tokens: G) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: source_stem(source),
            tokens,
        }
    }

    /// A fresh path for an attachment called `name`.
    pub fn path_for(&mut self, name: &str) -> PathBuf {
        let token = self.tokens.next_token();
        self.output_dir
            .join(attachment_file_name(&self.stem, &token, name))
    }
}
