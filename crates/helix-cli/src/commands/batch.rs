use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use helix_core::scan::SpiralScanner;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::ScanOptions;
use crate::summary::print_batch_table;

#[derive(Args)]
pub struct BatchArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub options: ScanOptions,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.options.resolve()?;
    let scanner = SpiralScanner::from_config(&config)?;
    info!(files = args.files.len(), viewport = %scanner.viewport(), "Starting batch scan");

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scanning");

    let results = scanner.scan_batch_with_progress(&args.files, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("Scanned");

    let failed = print_batch_table(&results);
    if failed == results.len() {
        bail!("All {} files failed to scan", failed);
    }
    Ok(())
}
