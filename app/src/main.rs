mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use gobo_core::run_batch_with;

use crate::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let batch = cli.batch_config()?;

    let start = Instant::now();
    let records = run_batch_with(&batch, |record| println!("{}", record))
        .with_context(|| format!("failed to generate gobos in {}", batch.output_dir.display()))?;
    log::debug!("generated in {:.2} ms", start.elapsed().as_secs_f32() * 1000.0);

    match (records.first(), records.last()) {
        (Some(first), Some(last)) => {
            println!("Done! Flower gobos {}-{} created.", first.id, last.id)
        }
        _ => println!("Done! No point counts given, nothing created."),
    }
    Ok(())
}
