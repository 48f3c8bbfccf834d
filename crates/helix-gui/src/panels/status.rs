use crate::app::HelixApp;

pub fn show(ctx: &egui::Context, app: &mut HelixApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if app.ui_state.busy {
            ui.add(egui::ProgressBar::new(0.0).text("Scanning...").animate(true));
        } else {
            // Same height as the busy bar so the layout does not jump.
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref scan) = app.scan {
                let vp = scan.path.viewport();
                ui.label(format!("Scanned: {vp}"));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
            ui.separator();
            ui.label(format!(
                "Viewport: {}x{}",
                app.config.width, app.config.height
            ));
        });

        ui.add_space(2.0);
    });
}
