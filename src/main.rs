use std::process::ExitCode;

use clap::Parser;
use clean_wording::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    clean_wording::logging::init(args.verbose);

    match clean_wording::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
