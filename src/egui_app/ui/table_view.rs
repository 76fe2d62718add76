use eframe::egui::{self, RichText, Ui};

use crate::egui_app::ui::style;
use crate::table::Table;

const MIN_COLUMN_WIDTH: f32 = 56.0;

/// Read-only grid of a table's header and rows.
pub(super) fn table_preview(ui: &mut Ui, id_salt: &str, table: &Table) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, style::palette().panel_outline))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            egui::ScrollArea::horizontal()
                .id_salt(id_salt)
                .show(ui, |ui| {
                    egui::Grid::new((id_salt, "grid"))
                        .striped(true)
                        .min_col_width(MIN_COLUMN_WIDTH)
                        .show(ui, |ui| {
                            for header in table.headers() {
                                ui.label(RichText::new(header).strong());
                            }
                            ui.end_row();
                            for row in table.rows() {
                                for cell in row {
                                    ui.label(cell);
                                }
                                ui.end_row();
                            }
                        });
                });
        });
}
