use std::process::ExitCode;

use clap::Parser;
use fintrack::cli::{self, output, Cli};

fn main() -> ExitCode {
    fintrack::init();
    let args = Cli::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
