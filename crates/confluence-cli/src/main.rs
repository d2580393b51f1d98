//! `confluence` binary.
//!
//! Loads config and subsystem analyses, schedules one merge and runs the
//! improvement loop alongside it. Ctrl-C cancels both. Reports are printed
//! to stdout as JSON lines; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use confluence_cli::{
    load_subsystems, parse, ChecklistHarness, CliArgs, Command, LoggingDeployer, SnapshotFileProbe,
};
use confluence_core::cancellation::{Cancellable, CancellationToken};
use confluence_core::traits::SystemClock;
use confluence_core::{ConfluenceConfig, ConfluenceError};
use confluence_fusion::FusionEngine;
use confluence_improvement::ImprovementLoop;
use confluence_observability::{try_init_from_config, CycleReport, MergeReport};
use confluence_orchestrator::MergeOrchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match parse(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{}", confluence_cli::args::USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e:#}\n\n{}", confluence_cli::args::USAGE);
            std::process::exit(2);
        }
    };
    run(args).await
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = ConfluenceConfig::load(args.config.as_deref()).context("loading config")?;
    try_init_from_config(&config.observability)
        .map_err(|e| anyhow::anyhow!("initializing tracing: {e}"))?;

    let subsystems = load_subsystems(&args.subsystems)?;
    let token = CancellationToken::new();

    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, shutting down");
            ctrl_c.cancel();
        }
    });

    let merge = if subsystems.is_empty() {
        None
    } else {
        let orchestrator = MergeOrchestrator::standard(
            config.scheduler.clone(),
            FusionEngine::new(config.fusion.clone()),
            SystemClock,
        )?;
        Some(Arc::new(orchestrator).spawn(subsystems, token.clone()))
    };

    let mut improvement = args
        .snapshot
        .as_ref()
        .map(|path| {
            ImprovementLoop::new(
                SnapshotFileProbe::new(path),
                ChecklistHarness::default(),
                LoggingDeployer,
                &config.improvement,
            )
        })
        .transpose()?;

    if args.once {
        if let Some(lp) = improvement.as_mut() {
            let cycle = lp.run_cycle()?;
            print_json(&CycleReport::from(&cycle))?;
        }
        improvement = None;
    }

    let improvement = improvement.map(|lp| {
        let handle = lp.handle();
        (lp.spawn(token.clone()), handle)
    });

    if let Some(merge) = merge {
        match merge.await? {
            Ok(result) => print_json(&MergeReport::from(&result))?,
            Err(ConfluenceError::Cancelled) => info!("merge cancelled"),
            Err(e) if e.is_no_viable_window() => warn!(error = %e, "merge skipped"),
            Err(e) => return Err(e.into()),
        }
    }

    match improvement {
        Some((task, handle)) => {
            let cycles = task.await?;
            for cycle in handle.history() {
                print_json(&CycleReport::from(&cycle))?;
            }
            let metrics = handle.metrics();
            info!(
                cycles,
                applied = metrics.applied,
                rejected = metrics.rejected,
                acceptance_rate = metrics.acceptance_rate(),
                "improvement loop finished"
            );
        }
        // Nothing left to wait for once the merge is done.
        None => token.cancel(),
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
