use anyhow::Result;
use thread_cli::replay::{self, OutputFormat, ReplayReport};
use thread_core::Forest;
use tracing::info;

use crate::cli::{OutlineArgs, OutputFormatArg, ReplayArgs};

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let seed = match &args.seed {
        Some(path) => replay::load_forest(path)?,
        None => Forest::new(),
    };
    let actions = replay::load_script(&args.script)?;
    info!(
        script = %args.script.display(),
        actions = actions.len(),
        seeded = seed.total_count(),
        "starting replay"
    );
    let report = replay::replay(seed, actions)?;
    println!("{}", replay::render(&report.forest, output_format(args.format))?);
    Ok(report)
}

pub fn run_outline(args: &OutlineArgs) -> Result<()> {
    let forest = replay::load_forest(&args.forest)?;
    println!("{}", replay::render(&forest, OutputFormat::Text)?);
    Ok(())
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
