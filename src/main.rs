//! Entry point for docgate.
use std::process::ExitCode;

use clap::Parser;
use docgate::{
    cli::{execute_cli_command, CliCommand, ParsedCommand, RunArgs},
    lib::telemetry,
    rules::RuleTable,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = RunArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;
    let rules = RuleTable::builtin();

    match command {
        ParsedCommand::Validate(profile) => runtime::run_validation(profile, &rules),
        ParsedCommand::Cli(command) => handle_cli_command(command, &rules),
    }
}

fn handle_cli_command(command: CliCommand, rules: &RuleTable) -> Result<ExitCode, RuntimeExit> {
    let message = execute_cli_command(command, rules).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
