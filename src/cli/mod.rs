use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, ModeArgs, ReportMode};
pub use exit_status::ExitStatus;
pub use run::{RunOutcome, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(config_path) = args.config_or_help() else {
        return Ok(ExitStatus::Usage);
    };

    let outcome = run(&config_path, args.mode.mode())?;
    report::print(&outcome);

    Ok(ExitStatus::Success)
}
