//! Command-line arguments.
//!
//! Usage:
//!   confluence [--config <toml>] --subsystem <json>... [--snapshot <json>] [--once]

use std::path::PathBuf;

use anyhow::{bail, Context};

pub const USAGE: &str = "\
confluence - schedule a subsystem merge and run the improvement loop

Usage:
  confluence [--config <toml>] --subsystem <json>... [--snapshot <json>] [--once]

Options:
  --config <toml>      Config file (defaults, then file, then CONFLUENCE_* env)
  --subsystem <json>   Subsystem analysis; repeat for each subsystem
  --snapshot <json>    Performance snapshot re-read at every improvement cycle
  --once               Run a single improvement cycle instead of looping
  -h, --help           Show this message

Environment:
  CONFLUENCE_LOG       Log filter, overrides the configured level";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub subsystems: Vec<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub once: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

/// Parse arguments, program name excluded.
pub fn parse<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--subsystem" => {
                let path = args.next().context("--subsystem requires a path")?;
                parsed.subsystems.push(PathBuf::from(path));
            }
            "--snapshot" => {
                let path = args.next().context("--snapshot requires a path")?;
                parsed.snapshot = Some(PathBuf::from(path));
            }
            "--once" => parsed.once = true,
            other => bail!("unknown argument: {other}"),
        }
    }

    if parsed.subsystems.is_empty() && parsed.snapshot.is_none() {
        bail!("nothing to do: pass at least one --subsystem or a --snapshot");
    }
    Ok(Command::Run(parsed))
}
