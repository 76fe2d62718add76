use eframe::egui::{self, RichText, SliderClamping};

use crate::egui_app::ui::EguiApp;
use crate::employee::{AGE_RANGE, EXPERIENCE_RANGE, Education, HOURS_PER_WEEK_RANGE, Occupation};

const PANEL_WIDTH: f32 = 280.0;
const COMBO_WIDTH: f32 = 200.0;

impl EguiApp {
    /// Sidebar with the five employee detail controls.
    pub(super) fn render_form_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("employee_details")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("Enter Employee Details").size(18.0));
                ui.add_space(12.0);
                let form = &mut self.controller.ui.form;

                ui.add(
                    egui::Slider::new(&mut form.age, AGE_RANGE)
                        .text("Age")
                        .clamping(SliderClamping::Always),
                );
                ui.add_space(8.0);

                ui.label("Education Level");
                egui::ComboBox::from_id_salt("education_combo")
                    .width(COMBO_WIDTH)
                    .selected_text(form.education.label())
                    .show_ui(ui, |ui| {
                        for education in Education::ALL {
                            ui.selectable_value(&mut form.education, education, education.label());
                        }
                    });
                ui.add_space(8.0);

                ui.label("Occupation");
                egui::ComboBox::from_id_salt("occupation_combo")
                    .width(COMBO_WIDTH)
                    .selected_text(form.occupation.label())
                    .show_ui(ui, |ui| {
                        for occupation in Occupation::ALL {
                            ui.selectable_value(
                                &mut form.occupation,
                                occupation,
                                occupation.label(),
                            );
                        }
                    });
                ui.add_space(8.0);

                ui.add(
                    egui::Slider::new(&mut form.hours_per_week, HOURS_PER_WEEK_RANGE)
                        .text("Hours per Week")
                        .clamping(SliderClamping::Always),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::Slider::new(&mut form.experience, EXPERIENCE_RANGE)
                        .text("Years of Experience")
                        .clamping(SliderClamping::Always),
                );
            });
    }
}
