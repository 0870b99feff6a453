//! Typed CSV loading for the redirect table
//!
//! The redirect table is a semicolon-delimited CSV whose header must carry the
//! two columns `Anciennes URLs` and `Nouvelles URLs`. Column presence is
//! checked once against the header before any row is deserialized, so a
//! mislabeled export fails with a clear message instead of a per-row serde
//! error. Additional columns are ignored; empty cells deserialize to `None`.

use crate::error::InputError;
use serde::Deserialize;
use std::path::Path;

/// Header label of the source (old) URL column
pub const OLD_URL_COLUMN: &str = "Anciennes URLs";

/// Header label of the target (new) URL column
pub const NEW_URL_COLUMN: &str = "Nouvelles URLs";

/// One row of the redirect table
///
/// Both fields are optional: an empty cell is `None`, and presence is the
/// engine's first per-row check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectRow {
    /// URL being retired
    #[serde(rename = "Anciennes URLs")]
    pub old_url: Option<String>,

    /// URL the old one redirects to
    #[serde(rename = "Nouvelles URLs")]
    pub new_url: Option<String>,
}

/// Reads the whole redirect table into memory, in file order
///
/// # Errors
///
/// Returns `InputError::Csv` if the file cannot be opened or has a broken
/// structure (uneven record lengths, invalid UTF-8), and
/// `InputError::MissingColumn` if either required header column is absent.
pub fn load_rows(path: &Path) -> Result<Vec<RedirectRow>, InputError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in [OLD_URL_COLUMN, NEW_URL_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(InputError::MissingColumn {
                name: required.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RedirectRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
