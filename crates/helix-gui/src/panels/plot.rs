use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::app::HelixApp;

/// Height of the stream chart in pixels.
const CHART_HEIGHT: f32 = 180.0;

/// Alpha and beta streams plotted from the outer edge (x = 0) toward the center.
pub fn show(ctx: &egui::Context, app: &mut HelixApp) {
    let Some(ref scan) = app.scan else {
        return;
    };

    egui::TopBottomPanel::bottom("stream_plot")
        .resizable(true)
        .default_height(CHART_HEIGHT)
        .show(ctx, |ui| {
            let result = &scan.result;
            let alpha = edge_first(&result.alpha_stream);
            let beta = edge_first(&result.beta_stream);
            let show_a = app.ui_state.show_branch_a;
            let show_b = app.ui_state.show_branch_b;

            Plot::new("stream_plot_chart")
                .legend(Legend::default())
                .x_axis_label("Sample (edge \u{2192} center)")
                .y_axis_label("Intensity")
                .include_y(0.0)
                .include_y(255.0)
                .show(ui, |plot_ui| {
                    if show_a {
                        plot_ui.line(
                            Line::new("Alpha", alpha)
                                .color(super::BRANCH_A_COLOR)
                                .width(1.5),
                        );
                    }
                    if show_b {
                        plot_ui.line(
                            Line::new("Beta", beta)
                                .color(super::BRANCH_B_COLOR)
                                .width(1.5),
                        );
                    }
                });
        });
}

fn edge_first(stream: &[f32]) -> PlotPoints<'static> {
    stream
        .iter()
        .rev()
        .enumerate()
        .map(|(i, v)| [i as f64, *v as f64])
        .collect::<Vec<_>>()
        .into()
}
