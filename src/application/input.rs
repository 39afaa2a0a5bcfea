//! Input acquisition: turn user-supplied text into an ordered list of integers.
//!
//! Two shapes are accepted:
//! - manual entry, a single delimited line such as `5, 3, 8`
//! - record files (CSV-like), one value per line in the first field

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::infrastructure::traits::FileSystem;

/// Where the values come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Manual(String),
}

fn parse_int(token: &str) -> Option<i64> {
    let token = token.trim();
    let token = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .map_or(token, str::trim);
    token.parse().ok()
}

/// Parse a manually typed, delimited list.
///
/// Every token must be an integer, so an empty string or a trailing delimiter
/// is rejected rather than silently dropped.
#[instrument(level = "debug")]
pub fn parse_manual(text: &str, delimiter: char) -> ApplicationResult<Vec<i64>> {
    text.split(delimiter)
        .enumerate()
        .map(|(i, token)| {
            parse_int(token).ok_or_else(|| ApplicationError::InvalidToken {
                token: token.trim().to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Parse record-per-line content, taking the first field of every non-blank line.
#[instrument(level = "debug", skip(content))]
pub fn parse_records(content: &str, delimiter: char) -> ApplicationResult<Vec<i64>> {
    let mut values = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let field = line.split(delimiter).next().unwrap_or_default();
        let value = parse_int(field).ok_or_else(|| ApplicationError::InvalidRecord {
            line: i + 1,
            field: field.trim().to_string(),
        })?;
        values.push(value);
    }
    debug!(count = values.len(), "parsed records");
    Ok(values)
}

/// Loads values from an [`InputSource`], reading files through the [`FileSystem`] boundary.
pub struct InputLoader {
    fs: Arc<dyn FileSystem>,
    delimiter: char,
}

impl InputLoader {
    pub fn new(fs: Arc<dyn FileSystem>, delimiter: char) -> Self {
        Self { fs, delimiter }
    }

    pub fn load(&self, source: &InputSource) -> ApplicationResult<Vec<i64>> {
        match source {
            InputSource::File(path) => self.load_file(path),
            InputSource::Manual(text) => parse_manual(text, self.delimiter),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn load_file(&self, path: &Path) -> ApplicationResult<Vec<i64>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read input file", path)?;
        parse_records(&content, self.delimiter)
    }
}
