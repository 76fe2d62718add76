use std::path::PathBuf;

use crate::egui_app::ui::style::StatusTone;

#[derive(Clone, Debug)]
pub(crate) enum StatusMessage {
    PredictionReady { label: String },
    PredictionFailed { err: String },
    BatchLoaded { file_name: String, rows: usize },
    BatchComplete { rows: usize },
    BatchFailed { err: String },
    BatchCleared,
    NothingToDownload,
    DownloadSaved { path: PathBuf },
    DownloadFailed { err: String },
    DropCsvFile,
    NothingSavedYet,
}

impl StatusMessage {
    pub(crate) fn into_text_and_tone(self) -> (String, StatusTone) {
        match self {
            StatusMessage::PredictionReady { label } => {
                (format!("Prediction: {label}"), StatusTone::Success)
            }
            StatusMessage::PredictionFailed { err } => {
                (format!("Prediction failed: {err}"), StatusTone::Error)
            }
            StatusMessage::BatchLoaded { file_name, rows } => (
                format!("Loaded {rows} rows from {file_name}"),
                StatusTone::Info,
            ),
            StatusMessage::BatchComplete { rows } => (
                format!("Batch predictions complete for {rows} rows"),
                StatusTone::Success,
            ),
            StatusMessage::BatchFailed { err } => (err, StatusTone::Error),
            StatusMessage::BatchCleared => ("Batch cleared".into(), StatusTone::Info),
            StatusMessage::NothingToDownload => (
                "Upload a CSV file to produce predictions first".into(),
                StatusTone::Warning,
            ),
            StatusMessage::DownloadSaved { path } => (
                format!("Predictions saved to {}", path.display()),
                StatusTone::Success,
            ),
            StatusMessage::DownloadFailed { err } => (err, StatusTone::Error),
            StatusMessage::DropCsvFile => {
                ("Drop a .csv file to run batch predictions".into(), StatusTone::Warning)
            }
            StatusMessage::NothingSavedYet => {
                ("No predictions have been saved yet".into(), StatusTone::Warning)
            }
        }
    }
}
