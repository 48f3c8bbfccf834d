pub mod controls;
pub mod menu_bar;
pub mod plot;
pub mod status;
pub mod viewport;

/// Lime, matching the overlay export.
pub(crate) const BRANCH_A_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);

/// Cyan, matching the overlay export.
pub(crate) const BRANCH_B_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 255);

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
