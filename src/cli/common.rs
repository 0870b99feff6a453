//! Shared CLI plumbing: exit codes and color resolution

use crate::cli::args::ColorChoice;
use std::io::IsTerminal;

/// Run completed; bad rows may have been skipped but that is not a failure
pub const EXIT_SUCCESS: i32 = 0;
/// Diagnostics were produced and `--strict` was set
pub const EXIT_DIAGNOSTICS: i32 = 1;
/// Input could not be read (missing file, I/O failure)
pub const EXIT_ERROR: i32 = 2;
/// Input was read but is not a usable redirect table (CSV structure, missing column)
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Maps the CLI color flag to a termcolor choice for the stderr stream
///
/// `Auto` only colors when stderr is a terminal, so redirected diagnostics
/// stay free of escape sequences.
pub(crate) fn stderr_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stderr().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
