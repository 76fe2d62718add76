use eframe::egui::{RichText, Ui};

use super::style::{self, StatusTone};
use super::{EguiApp, result_box, table_view};

impl EguiApp {
    pub(super) fn render_batch_section(&mut self, ui: &mut Ui) {
        let muted = style::palette().text_muted;
        ui.label(RichText::new("Batch Prediction (Upload CSV)").strong().size(18.0));
        ui.label(
            RichText::new("Upload a CSV file with employee data, or drop one onto the window.")
                .color(muted),
        );
        ui.add_space(6.0);

        let has_upload = self.controller.ui.batch.has_upload();
        let file_name = self.controller.ui.batch.file_name.clone();
        ui.horizontal(|ui| {
            if ui.button("Upload CSV…").clicked() {
                self.controller.upload_batch_via_dialog();
            }
            if has_upload && ui.button("Clear").clicked() {
                self.controller.clear_batch();
            }
            if let Some(name) = &file_name {
                ui.label(RichText::new(name).color(muted));
            }
        });

        let batch = &self.controller.ui.batch;
        if let Some(preview) = &batch.uploaded_preview {
            ui.add_space(8.0);
            ui.label(RichText::new("Uploaded Data Preview:").strong());
            ui.label(
                RichText::new(format!(
                    "Showing {} of {} rows",
                    preview.row_count(),
                    batch.uploaded_rows
                ))
                .color(muted),
            );
            table_view::table_preview(ui, "uploaded_preview", preview);
        }

        if let Some(err) = &batch.error {
            result_box(ui, StatusTone::Error, err);
        }

        let Some(result) = &batch.result_preview else {
            return;
        };
        result_box(ui, StatusTone::Success, "Batch predictions complete!");
        ui.add_space(6.0);
        table_view::table_preview(ui, "result_preview", result);
        ui.add_space(8.0);

        let saved_to = batch.saved_to.clone();
        ui.horizontal(|ui| {
            let download_label = format!(
                "Download Predictions as CSV ({})",
                self.controller.batch_settings().download_file_name
            );
            if ui.button(download_label).clicked() {
                self.controller.save_predictions_via_dialog();
            }
            if saved_to.is_some() && ui.button("Open folder").clicked() {
                self.controller.open_saved_folder();
            }
        });
        if let Some(path) = &saved_to {
            ui.label(RichText::new(format!("Saved to {}", path.display())).color(muted));
        }
    }
}
