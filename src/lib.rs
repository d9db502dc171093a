// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod parsers;

use std::fs::File;
use std::path::Path;

use keystats_engine::RunSummary;
use keystats_engine::options::Options;

use crate::args::AggregateArgs;
use crate::error::{AppError, Result};

/// Aggregate the selected input and print the report to stdout.
pub fn run_aggregate(args: &AggregateArgs) -> Result<RunSummary> {
    let options = Options::from(args);
    let mut stdout = std::io::stdout().lock();

    let summary = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| AppError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("reading {}", path.display());
            keystats_engine::run(file, &mut stdout, &options)?
        }
        _ => {
            log::info!("reading stdin");
            keystats_engine::run(std::io::stdin(), &mut stdout, &options)?
        }
    };

    log::info!(
        "{} records, {} keys, {} skipped",
        summary.records,
        summary.keys,
        summary.skipped
    );
    Ok(summary)
}
