use anyhow::Result;
use clap::Args;
use helix_core::scan::SpiralScanner;

use super::ScanOptions;
use crate::summary::print_path_summary;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub options: ScanOptions,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.options.resolve()?;
    let scanner = SpiralScanner::from_config(&config)?;
    let path = scanner.path();

    print_path_summary(&config, &path);
    Ok(())
}
