//! Error types for Redirgen
//!
//! Per-row problems (missing values, invalid URLs) are not errors in this
//! sense: they become [`crate::diagnostics::Diagnostic`]s and never abort a
//! run. The types here cover the fatal cases only, i.e. anything that stops
//! the input file from being read as a redirect table at all.

/// Errors raised while loading the redirect table
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// I/O error while opening or reading the CSV file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural CSV error (unreadable file, uneven record lengths, bad UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is absent
    #[error("missing required column '{name}' in CSV header")]
    MissingColumn { name: String },
}

/// Top-level error type for Redirgen
#[derive(Debug, thiserror::Error)]
pub enum RedirgenError {
    /// Input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = InputError::MissingColumn {
            name: "Anciennes URLs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required column 'Anciennes URLs' in CSV header"
        );
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: RedirgenError = InputError::from(io).into();
        assert!(err.to_string().contains("no such file"));
    }
}
