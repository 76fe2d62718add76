//! Maintains app state and bridges prediction logic to the egui UI.

mod batch;
mod status_message;


use std::sync::Arc;

use eframe::egui;

use crate::config::{AppSettings, BatchSettings};
use crate::egui_app::state::{PredictionView, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::employee::{FormState, InputRecord};
use crate::ml::Classifier;
use crate::prediction::{self, BatchPrediction};

pub(crate) use status_message::StatusMessage;

/// Owns the loaded model and the UI state the renderer reads every frame.
pub struct AppController {
    pub ui: UiState,
    model: Arc<dyn Classifier>,
    settings: BatchSettings,
    /// Form values the current `ui.prediction` was computed for.
    predicted_for: Option<FormState>,
    batch_result: Option<BatchPrediction>,
}

impl AppController {
    /// Build a controller around a loaded model and the startup settings.
    pub fn new(model: Arc<dyn Classifier>, settings: &AppSettings) -> Self {
        Self {
            ui: UiState::default(),
            model,
            settings: settings.batch.clone(),
            predicted_for: None,
            batch_result: None,
        }
    }

    pub fn batch_settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Record built from the current control values.
    pub fn input_record(&self) -> InputRecord {
        self.ui.form.record()
    }

    /// Drop a stale single prediction once the controls move away from it.
    pub fn sync_form(&mut self) {
        if self.predicted_for.is_some_and(|form| form != self.ui.form) {
            self.predicted_for = None;
            self.ui.prediction = None;
        }
    }

    /// Run the model on the current record; bound to the Predict button.
    pub fn predict_current(&mut self) {
        let record = self.input_record();
        self.predicted_for = Some(self.ui.form);
        match prediction::predict_record(self.model.as_ref(), &record) {
            Ok(label) => {
                tracing::info!(?record, %label, "Single prediction");
                self.ui.prediction = Some(PredictionView::Label(label.clone()));
                self.set_status_message(StatusMessage::PredictionReady { label });
            }
            Err(err) => {
                tracing::warn!(?record, error = %err, "Single prediction failed");
                let err = err.to_string();
                self.ui.prediction = Some(PredictionView::Failed(err.clone()));
                self.set_status_message(StatusMessage::PredictionFailed { err });
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }

    pub(crate) fn set_status_message(&mut self, message: StatusMessage) {
        let (text, tone) = message.into_text_and_tone();
        self.set_status(text, tone);
    }
}
