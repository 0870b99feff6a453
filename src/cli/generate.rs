//! Generate command implementation
//!
//! This is the whole program: load the redirect table, run the engine, route
//! diagnostics to stderr in the requested format, print the rule document to
//! stdout, and map the outcome to an exit code:
//! - 0: success (skipped rows do not fail the run)
//! - 1: diagnostics were produced and `--strict` was set
//! - 2: input error (missing file, I/O failure)
//! - 3: parse error (broken CSV structure, missing required column)

use crate::cli::args::{ColorChoice, DiagnosticFormat};
use crate::cli::common::{EXIT_DIAGNOSTICS, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::error::InputError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::{engine, input};
use std::path::Path;
use termcolor::StandardStream;

/// Run the generate command and return the process exit code
pub fn run_generate(
    csv_file: &Path,
    format: DiagnosticFormat,
    color: ColorChoice,
    strict: bool,
) -> i32 {
    match run_generate_inner(csv_file, format, color) {
        Ok(clean) => {
            if clean || !strict {
                EXIT_SUCCESS
            } else {
                EXIT_DIAGNOSTICS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of the generate command
///
/// Returns whether the run produced no diagnostics.
fn run_generate_inner(
    csv_file: &Path,
    format: DiagnosticFormat,
    color: ColorChoice,
) -> Result<bool, InputError> {
    let rows = input::load_rows(csv_file)?;
    let result = engine::generate(&rows);

    match format {
        DiagnosticFormat::Human => {
            let mut stderr = StandardStream::stderr(super::common::stderr_color(color));
            HumanFormatter::new().write(&result.diagnostics, &mut stderr)?;
        }
        DiagnosticFormat::Jsonl => {
            eprint!("{}", JsonlFormatter::new().format(&result));
        }
    }

    // The rule document is the program's only stdout output
    println!("{}", result.document.render());

    Ok(result.is_clean())
}

/// Distinguishes unreadable input from input that is not a redirect table
fn exit_code_for(error: &InputError) -> i32 {
    match error {
        InputError::Io(_) => EXIT_ERROR,
        InputError::MissingColumn { .. } => EXIT_PARSE_ERROR,
        InputError::Csv(e) => {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                EXIT_ERROR
            } else {
                EXIT_PARSE_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_exit_error() {
        let code = run_generate(
            Path::new("/nonexistent/redirects.csv"),
            DiagnosticFormat::Human,
            ColorChoice::Never,
            false,
        );
        assert_eq!(code, EXIT_ERROR);
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let file = write_csv("Anciennes URLs;Autres\nhttps://example.com/a;x\n");
        let code = run_generate(
            file.path(),
            DiagnosticFormat::Human,
            ColorChoice::Never,
            false,
        );
        assert_eq!(code, EXIT_PARSE_ERROR);
    }

    #[test]
    fn test_bad_rows_still_succeed_without_strict() {
        let file = write_csv(
            "Anciennes URLs;Nouvelles URLs\n\
             ;https://example.com/b\n",
        );
        let code = run_generate(
            file.path(),
            DiagnosticFormat::Human,
            ColorChoice::Never,
            false,
        );
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[test]
    fn test_bad_rows_fail_under_strict() {
        let file = write_csv(
            "Anciennes URLs;Nouvelles URLs\n\
             ;https://example.com/b\n",
        );
        let code = run_generate(
            file.path(),
            DiagnosticFormat::Human,
            ColorChoice::Never,
            true,
        );
        assert_eq!(code, EXIT_DIAGNOSTICS);
    }

    #[test]
    fn test_clean_run_succeeds_under_strict() {
        let file = write_csv(
            "Anciennes URLs;Nouvelles URLs\n\
             https://example.com/old;https://example.com/new\n",
        );
        let code = run_generate(
            file.path(),
            DiagnosticFormat::Jsonl,
            ColorChoice::Never,
            true,
        );
        assert_eq!(code, EXIT_SUCCESS);
    }
}
