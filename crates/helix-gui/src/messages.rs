use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use helix_core::geometry::SpiralPath;
use helix_core::scan::config::ScanConfig;
use helix_core::scan::ScanResult;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode, normalize and sample an image file.
    Scan { path: PathBuf, config: ScanConfig },

    /// Write the current scan with both branches drawn on it.
    SaveOverlay { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ScanComplete {
        source_path: PathBuf,
        result: ScanResult,
        path: Arc<SpiralPath>,
        elapsed: Duration,
    },
    /// An image picked from the open dialog, to be scanned with the
    /// current parameters.
    FileSelected {
        path: PathBuf,
    },
    ConfigImported {
        config: ScanConfig,
    },
    OverlaySaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
