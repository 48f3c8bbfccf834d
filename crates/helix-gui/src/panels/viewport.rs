use helix_core::geometry::{Branch, SpiralPath};

use crate::app::HelixApp;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 20.0;

const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

pub fn show(ctx: &egui::Context, app: &mut HelixApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), egui::vec2(t.size()[0] as f32, t.size()[1] as f32)));

        if let Some((texture_id, image_size)) = texture_info {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_zoom(ui, &response, app, rect);
            handle_pan(ui, &response, app);

            if response.double_clicked() {
                fit_to_rect(
                    &mut app.viewport.zoom,
                    &mut app.viewport.pan_offset,
                    image_size,
                    rect,
                );
            }

            let img_rect = compute_img_rect(rect, image_size, app);
            let painter = ui.painter_at(rect);
            draw_image(&painter, texture_id, img_rect);
            painter.rect_stroke(
                img_rect,
                0.0,
                egui::Stroke::new(1.0, BORDER_COLOR),
                egui::StrokeKind::Inside,
            );

            if let Some(ref scan) = app.scan {
                draw_path(&painter, &scan.path, img_rect, app);
            }
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut HelixApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut HelixApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary)
            && !ui.input(|i| i.modifiers.command))
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &HelixApp) -> egui::Rect {
    let scaled = image_size * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(painter: &egui::Painter, texture_id: egui::TextureId, img_rect: egui::Rect) {
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Plot each sample at the center of its pixel, scaled with the image.
fn draw_path(painter: &egui::Painter, path: &SpiralPath, img_rect: egui::Rect, app: &HelixApp) {
    let zoom = app.viewport.zoom;
    let radius = (zoom * 0.5).clamp(1.0, 4.0);

    if app.ui_state.show_branch_a {
        draw_branch(painter, path.branch_a(), img_rect.min, zoom, radius, super::BRANCH_A_COLOR);
    }
    if app.ui_state.show_branch_b {
        draw_branch(painter, path.branch_b(), img_rect.min, zoom, radius, super::BRANCH_B_COLOR);
    }
}

fn draw_branch(
    painter: &egui::Painter,
    branch: &Branch,
    origin: egui::Pos2,
    zoom: f32,
    radius: f32,
    color: egui::Color32,
) {
    for (x, y) in branch.iter() {
        let pos = origin + egui::vec2(x as f32 + 0.5, y as f32 + 0.5) * zoom;
        painter.circle_filled(pos, radius, color);
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(zoom: &mut f32, pan: &mut egui::Vec2, image_size: egui::Vec2, rect: egui::Rect) {
    let available = rect.size();
    let fit_x = available.x / image_size.x;
    let fit_y = available.y / image_size.y;
    *zoom = fit_x.min(fit_y).clamp(MIN_ZOOM, MAX_ZOOM);
    *pan = egui::Vec2::ZERO;
}
