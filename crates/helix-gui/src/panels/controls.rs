use crate::app::HelixApp;
use crate::panels::menu_bar::open_file;
use crate::panels::section_header;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut HelixApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                viewport_section(ui, app);
                ui.separator();
                sampling_section(ui, app);
                ui.separator();
                display_section(ui, app);
                ui.separator();
                actions_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut HelixApp) {
    section_header(ui, "File", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        open_file(ui.ctx(), app);
    }

    if let Some(ref path) = app.ui_state.file_path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ui.label(name).on_hover_text(path.display().to_string());
    } else {
        ui.weak("No image loaded");
    }
}

fn viewport_section(ui: &mut egui::Ui, app: &mut HelixApp) {
    section_header(ui, "Viewport", None);
    ui.add_space(4.0);

    let mut changed = false;
    egui::Grid::new("viewport_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Width");
            changed |= ui
                .add(egui::DragValue::new(&mut app.config.width).range(1..=16384).suffix(" px"))
                .changed();
            ui.end_row();

            ui.label("Height");
            changed |= ui
                .add(egui::DragValue::new(&mut app.config.height).range(1..=16384).suffix(" px"))
                .changed();
            ui.end_row();
        });

    if changed {
        app.ui_state.params_dirty = true;
    }
}

fn sampling_section(ui: &mut egui::Ui, app: &mut HelixApp) {
    section_header(ui, "Sampling", None);
    ui.add_space(4.0);

    let mut changed = false;

    changed |= ui
        .add(
            egui::Slider::new(&mut app.config.num_points, 1..=20_000)
                .logarithmic(true)
                .text("Points"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut app.config.rotations, 0.0..=32.0)
                .step_by(0.25)
                .text("Rotations"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut app.config.growth_factor, 0.05..=1.0)
                .step_by(0.05)
                .text("Growth"),
        )
        .on_hover_text("Lower values pack more samples into the inner turns")
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut app.config.radius_scale, 0.05..=1.0)
                .fixed_decimals(3)
                .text("Radius"),
        )
        .on_hover_text("Maximum radius as a fraction of the smaller viewport side")
        .changed();

    if changed {
        app.ui_state.params_dirty = true;
    }
}

fn display_section(ui: &mut egui::Ui, app: &mut HelixApp) {
    section_header(ui, "Display", None);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.checkbox(&mut app.ui_state.show_branch_a, "");
        ui.colored_label(super::BRANCH_A_COLOR, "Branch A (alpha)");
    });
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.ui_state.show_branch_b, "");
        ui.colored_label(super::BRANCH_B_COLOR, "Branch B (beta)");
    });
}

fn actions_section(ui: &mut egui::Ui, app: &mut HelixApp) {
    let status = if app.ui_state.busy {
        Some("Scanning...")
    } else if app.ui_state.params_dirty && app.scan.is_some() {
        Some("Parameters changed")
    } else {
        None
    };
    section_header(ui, "Scan", status);
    ui.add_space(4.0);

    let can_scan = app.ui_state.file_path.is_some() && !app.ui_state.busy;
    if ui
        .add_enabled(can_scan, egui::Button::new("Scan").min_size(egui::vec2(120.0, 0.0)))
        .clicked()
    {
        app.request_scan();
    }

    if let Some(ref scan) = app.scan {
        ui.add_space(4.0);
        egui::Grid::new("scan_summary_grid")
            .num_columns(2)
            .spacing([8.0, 2.0])
            .show(ui, |ui| {
                ui.label("Samples");
                ui.label(format!("{} / {}", scan.path.len(), scan.path.generated()));
                ui.end_row();

                if let Some(stats) = scan.result.alpha_stats() {
                    ui.label("Alpha mean");
                    ui.label(format!("{:.2}", stats.mean));
                    ui.end_row();
                }
                if let Some(stats) = scan.result.beta_stats() {
                    ui.label("Beta mean");
                    ui.label(format!("{:.2}", stats.mean));
                    ui.end_row();
                }

                ui.label("Correlation");
                match scan.result.correlation() {
                    Some(r) => ui.label(format!("{r:.3}")),
                    None => ui.weak("undefined"),
                };
                ui.end_row();
            });
    }
}
