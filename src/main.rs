//! Redirgen CLI entry point

use clap::Parser;
use redirgen::cli::args::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code =
        redirgen::cli::generate::run_generate(&cli.csv_file, cli.format, cli.color, cli.strict);

    process::exit(exit_code);
}
