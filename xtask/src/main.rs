mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build).
    Preflight,
    /// Run the documentation gate against this repository.
    SelfCheck {
        /// Base reference to compare against (auto-detected when omitted)
        #[arg(long, value_name = "REF")]
        base: Option<String>,
        /// Emit the JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::SelfCheck { base, json } => {
            cmd::self_check::run(base, json)?;
        }
    }
    Ok(())
}
