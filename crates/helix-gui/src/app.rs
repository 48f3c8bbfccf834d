use std::sync::mpsc;

use helix_core::frame::Frame;

use crate::convert::frame_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ConfigState, ScanView, UIState, ViewportState};
use crate::worker;

pub struct HelixApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: ConfigState,
    pub scan: Option<ScanView>,
    pub show_about: bool,
}

impl HelixApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::new(),
            viewport: ViewportState::default(),
            config: ConfigState::default(),
            scan: None,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ScanComplete {
                    source_path,
                    result,
                    path,
                    elapsed,
                } => {
                    self.ui_state.busy = false;
                    self.ui_state.params_dirty = false;
                    self.ui_state.add_log(format!(
                        "Scanned {}: {} of {} samples in bounds ({})",
                        source_path.display(),
                        path.len(),
                        path.generated(),
                        format_duration(elapsed)
                    ));
                    self.update_viewport_texture(ctx, &result.source);
                    self.ui_state.file_path = Some(source_path.clone());
                    self.scan = Some(ScanView {
                        source_path,
                        result,
                        path,
                    });
                }
                WorkerResult::FileSelected { path } => {
                    self.ui_state.file_path = Some(path);
                    self.request_scan();
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = ConfigState::from_scan_config(&config);
                    self.ui_state.params_dirty = true;
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::OverlaySaved { path } => {
                    self.ui_state.busy = false;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.busy = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, frame: &Frame) {
        let image = frame_to_color_image(frame);
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
    }

    /// Ask the worker to scan the open file with the current parameters.
    pub fn request_scan(&mut self) {
        if let Some(path) = self.ui_state.file_path.clone() {
            self.ui_state.busy = true;
            self.send_command(WorkerCommand::Scan {
                path,
                config: self.config.to_scan_config(),
            });
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for HelixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::plot::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Helix")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Helix");
                        ui.label("Double-Spiral Image Sampling");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_selected_file_starts_scan() {
        let ctx = egui::Context::default();
        let mut app = HelixApp::new(&ctx);
        assert!(!app.ui_state.busy);

        let path = PathBuf::from("/nonexistent/picked.png");
        app.result_tx
            .send(WorkerResult::FileSelected { path: path.clone() })
            .unwrap();
        app.poll_results(&ctx);

        assert!(app.ui_state.busy);
        assert_eq!(app.ui_state.file_path, Some(path));
    }

    #[test]
    fn test_scan_error_clears_busy() {
        let ctx = egui::Context::default();
        let mut app = HelixApp::new(&ctx);
        app.ui_state.busy = true;

        app.result_tx
            .send(WorkerResult::Error {
                message: "decode failed".into(),
            })
            .unwrap();
        app.poll_results(&ctx);

        assert!(!app.ui_state.busy);
        assert!(app.ui_state.log_messages.iter().any(|m| m.contains("decode failed")));
    }
}
