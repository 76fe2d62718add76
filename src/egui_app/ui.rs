//! egui renderer for the application UI.
mod batch_panel;
mod form_panel;
pub mod style;
mod table_view;

use crate::egui_app::controller::AppController;
use crate::egui_app::state::PredictionView;
use eframe::egui::{self, Margin, RichText, Ui};
use style::StatusTone;

/// Window and page title.
pub const APP_TITLE: &str = "Employee Salary Classification";
/// Minimum viewport size that keeps the form and previews usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);

const DESCRIPTION: &str =
    "Use this app to predict whether an employee earns >50K or ≤50K based on various inputs.";

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap a controller for rendering; visuals are applied on the first frame.
    pub fn new(controller: AppController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn consume_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        self.controller.handle_dropped_files(dropped_files);
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(6.0, 9.0),
                    6.0,
                    status.badge_color,
                );
                ui.add_space(16.0);
                ui.label(RichText::new(&status.badge_label).strong());
                ui.separator();
                let response = ui.label(&status.text);
                if !status.log.is_empty() {
                    response.on_hover_text(status.log_text());
                }
            });
        });
    }

    fn render_center(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    ui.heading(RichText::new(APP_TITLE).size(26.0));
                    ui.label(RichText::new(DESCRIPTION).color(style::palette().text_muted));
                    ui.add_space(12.0);
                    self.render_single_prediction(ui);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    self.render_batch_section(ui);
                });
        });
    }

    fn render_single_prediction(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Preview of Input Data").strong());
        let input = self.controller.input_record().to_table();
        table_view::table_preview(ui, "input_preview", &input);
        ui.add_space(8.0);
        if ui.button("Predict Salary Class").clicked() {
            self.controller.predict_current();
        }
        match &self.controller.ui.prediction {
            Some(PredictionView::Label(label)) => {
                result_box(ui, StatusTone::Success, &format!("Prediction: {label}"));
            }
            Some(PredictionView::Failed(err)) => {
                result_box(ui, StatusTone::Error, &format!("Prediction failed: {err}"));
            }
            None => {}
        }
    }
}

/// Tinted message box used for success and error results.
fn result_box(ui: &mut Ui, tone: StatusTone, text: &str) {
    ui.add_space(6.0);
    egui::Frame::new()
        .fill(style::result_fill(tone))
        .stroke(egui::Stroke::new(1.0, style::status_badge_color(tone)))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(style::status_badge_color(tone)));
        });
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.consume_dropped_files(ctx);
        self.render_status(ctx);
        self.render_form_panel(ctx);
        self.controller.sync_form();
        self.render_center(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppSettings;
    use crate::ml::{Classifier, PredictError};
    use crate::table::Table;
    use std::sync::Arc;

    struct AlwaysHigh;

    impl Classifier for AlwaysHigh {
        fn predict(&self, table: &Table) -> Result<Vec<String>, PredictError> {
            Ok(vec![">50K".to_string(); table.row_count()])
        }
    }

    fn render_frame(app: &mut EguiApp, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            app.render_status(ctx);
            app.render_form_panel(ctx);
            app.render_center(ctx);
        });
    }

    #[test]
    fn frame_renders_batch_previews_without_touching_state() {
        let mut controller = AppController::new(Arc::new(AlwaysHigh), &AppSettings::default());
        controller.load_batch_bytes(
            "staff.csv",
            b"age,education,occupation,hours-per-week,experience\n30,Masters,Sales,40,5\n",
        );
        controller.predict_current();
        let mut app = EguiApp::new(controller);
        let before = app.controller.ui.batch.clone();
        let ctx = egui::Context::default();

        render_frame(&mut app, &ctx);
        render_frame(&mut app, &ctx);

        assert_eq!(app.controller.ui.batch, before);
        assert!(app.controller.download_bytes().is_some());
        assert_eq!(
            app.controller.ui.prediction,
            Some(PredictionView::Label(">50K".into()))
        );
    }
}
