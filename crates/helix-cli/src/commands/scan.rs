use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use helix_core::io::image_io::save_png;
use helix_core::render::overlay::render_overlay;
use helix_core::scan::SpiralScanner;
use tracing::info;

use super::ScanOptions;
use crate::summary::print_scan_summary;

#[derive(Args)]
pub struct ScanArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub options: ScanOptions,

    /// Write the image with both spiral branches drawn on it (PNG)
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Number of samples to list, edge first
    #[arg(long, default_value = "10")]
    pub head: usize,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = args.options.resolve()?;
    let scanner = SpiralScanner::from_config(&config)?;
    info!(file = %args.file.display(), sampling = %config.sampling, "Scanning");

    let result = scanner
        .scan(&args.file)
        .with_context(|| format!("Failed to scan {}", args.file.display()))?;

    print_scan_summary(&args.file, &config, &result, args.head);

    if let Some(ref out) = args.overlay {
        let overlay = render_overlay(&result.source, &scanner.path());
        save_png(&overlay, out)
            .with_context(|| format!("Failed to write overlay to {}", out.display()))?;
        println!("Overlay saved to {}", out.display());
    }

    Ok(())
}
