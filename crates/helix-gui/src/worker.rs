use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use helix_core::geometry::SpiralPath;
use helix_core::io::image_io::save_png;
use helix_core::render::overlay::render_overlay;
use helix_core::scan::config::ScanConfig;
use helix_core::scan::{ScanResult, SpiralScanner};
use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};

/// Scanner and latest result living on the worker thread.
struct ScanCache {
    config: Option<ScanConfig>,
    scanner: Option<SpiralScanner>,
    latest: Option<(ScanResult, Arc<SpiralPath>)>,
}

impl ScanCache {
    fn new() -> Self {
        Self {
            config: None,
            scanner: None,
            latest: None,
        }
    }

    /// Reuse the scanner (and its spiral path) until the config changes.
    fn scanner_for(&mut self, config: &ScanConfig) -> anyhow::Result<&SpiralScanner> {
        if self.config.as_ref() != Some(config) || self.scanner.is_none() {
            info!(
                width = config.viewport.width,
                height = config.viewport.height,
                "Building spiral scanner"
            );
            self.scanner = Some(SpiralScanner::from_config(config)?);
            self.config = Some(config.clone());
        }
        self.scanner
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("scanner unavailable"))
    }
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("helix-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, err: impl std::fmt::Display) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: err.to_string(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut cache = ScanCache::new();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Scan { path, config } => {
                handle_scan(&mut cache, &path, &config, &tx, &ctx);
            }
            WorkerCommand::SaveOverlay { path } => {
                handle_save_overlay(&cache, &path, &tx, &ctx);
            }
        }
    }
}

fn handle_scan(
    cache: &mut ScanCache,
    source_path: &Path,
    config: &ScanConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let scanner = match cache.scanner_for(config) {
        Ok(s) => s,
        Err(e) => return send_error(tx, ctx, format!("{e:#}")),
    };
    let spiral = scanner.path();

    match scanner.scan(source_path) {
        Ok(result) => {
            cache.latest = Some((result.clone(), spiral.clone()));
            send(
                tx,
                ctx,
                WorkerResult::ScanComplete {
                    source_path: source_path.to_path_buf(),
                    result,
                    path: spiral,
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send_error(tx, ctx, e),
    }
}

fn handle_save_overlay(
    cache: &ScanCache,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some((ref result, ref spiral)) = cache.latest else {
        return send_error(tx, ctx, "No scan to save");
    };
    let overlay = render_overlay(&result.source, spiral);
    match save_png(&overlay, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::OverlaySaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, e),
    }
}
