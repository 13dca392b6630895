//! bhjson — run entity JSON through the Bullhorn REST codec.
//!
//! Usage:
//!   bhjson candidate input.json --include-null email
//!   cat job.json | bhjson job-order --compact

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use bullhorn_cli::{normalize, Args};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let json = match &args.file {
        Some(path) => {
            info!("Reading {}", path.display());
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            normalize(&args, file)?
        }
        None => normalize(&args, io::stdin().lock())?,
    };
    println!("{json}");
    Ok(())
}
