use std::path::Path;

use rfd::FileDialog;

use super::*;
use crate::egui_app::state::BatchState;
use crate::prediction::BatchError;

const CSV_EXTENSION: &str = "csv";

impl AppController {
    /// Pick a CSV file and run batch predictions on it.
    pub fn upload_batch_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &[CSV_EXTENSION])
            .pick_file()
        else {
            return;
        };
        self.load_batch_from_path(&path);
    }

    pub fn load_batch_from_path(&mut self, path: &Path) {
        let file_name = display_name(path);
        match prediction::read_upload(path) {
            Ok(bytes) => self.load_batch_bytes(&file_name, &bytes),
            Err(err) => {
                self.reset_batch(&file_name);
                self.fail_batch(err);
            }
        }
    }

    /// Parse, preview and predict an uploaded file, replacing any previous batch.
    pub fn load_batch_bytes(&mut self, file_name: &str, bytes: &[u8]) {
        self.reset_batch(file_name);
        let uploaded = match prediction::parse_upload(bytes) {
            Ok(table) => table,
            Err(err) => return self.fail_batch(err),
        };
        tracing::info!(
            file = file_name,
            rows = uploaded.row_count(),
            columns = uploaded.column_count(),
            "Parsed batch upload"
        );
        let preview_rows = self.settings.preview_rows;
        self.ui.batch.uploaded_rows = uploaded.row_count();
        self.ui.batch.uploaded_preview = Some(uploaded.head(preview_rows));
        self.set_status_message(StatusMessage::BatchLoaded {
            file_name: file_name.to_string(),
            rows: uploaded.row_count(),
        });

        match prediction::predict_batch(
            self.model.as_ref(),
            &uploaded,
            &self.settings.prediction_column,
        ) {
            Ok(result) => {
                let rows = result.table.row_count();
                tracing::info!(file = file_name, rows, "Batch predictions complete");
                self.ui.batch.result_preview = Some(result.table.head(preview_rows));
                self.batch_result = Some(result);
                self.set_status_message(StatusMessage::BatchComplete { rows });
            }
            Err(err) => self.fail_batch(err),
        }
    }

    /// Full augmented table and CSV bytes of the current batch.
    pub fn batch_result(&self) -> Option<&BatchPrediction> {
        self.batch_result.as_ref()
    }

    /// CSV bytes offered for download, when a batch succeeded.
    pub fn download_bytes(&self) -> Option<&[u8]> {
        self.batch_result.as_ref().map(|result| result.csv.as_slice())
    }

    /// Ask where to save the download, suggesting the configured file name.
    pub fn save_predictions_via_dialog(&mut self) {
        if self.batch_result.is_none() {
            self.set_status_message(StatusMessage::NothingToDownload);
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &[CSV_EXTENSION])
            .set_file_name(&self.settings.download_file_name)
            .save_file()
        else {
            return;
        };
        if let Err(err) = self.save_predictions_to(&path) {
            self.set_status_message(StatusMessage::DownloadFailed { err });
        }
    }

    /// Write the current download to a known path.
    pub fn save_predictions_to(&mut self, path: &Path) -> Result<(), String> {
        let Some(result) = self.batch_result.as_ref() else {
            return Err("No batch predictions to save".into());
        };
        prediction::save_download(path, result).map_err(|err| {
            tracing::warn!(error = %err, "Saving batch predictions failed");
            err.to_string()
        })?;
        tracing::info!(
            path = %path.display(),
            bytes = result.csv.len(),
            "Saved batch predictions"
        );
        self.ui.batch.saved_to = Some(path.to_path_buf());
        self.set_status_message(StatusMessage::DownloadSaved {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Reveal the folder holding the last saved download.
    pub fn open_saved_folder(&mut self) {
        let Some(folder) = self
            .ui
            .batch
            .saved_to
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
        else {
            self.set_status_message(StatusMessage::NothingSavedYet);
            return;
        };
        if let Err(err) = open::that(&folder) {
            self.set_status(
                format!("Could not open folder {}: {err}", folder.display()),
                StatusTone::Error,
            );
        }
    }

    pub fn clear_batch(&mut self) {
        self.batch_result = None;
        self.ui.batch = BatchState::default();
        self.set_status_message(StatusMessage::BatchCleared);
    }

    /// Run batch predictions on the first dropped CSV file.
    pub fn handle_dropped_files(&mut self, files: Vec<egui::DroppedFile>) {
        if files.is_empty() {
            return;
        }
        let Some(file) = files.into_iter().find(is_csv_drop) else {
            self.set_status_message(StatusMessage::DropCsvFile);
            return;
        };
        match (file.bytes, file.path) {
            (Some(bytes), path) => {
                let name = path
                    .as_deref()
                    .map(display_name)
                    .unwrap_or_else(|| file.name.clone());
                self.load_batch_bytes(&name, &bytes);
            }
            (None, Some(path)) => self.load_batch_from_path(&path),
            (None, None) => self.set_status_message(StatusMessage::DropCsvFile),
        }
    }

    fn reset_batch(&mut self, file_name: &str) {
        self.batch_result = None;
        self.ui.batch = BatchState {
            file_name: Some(file_name.to_string()),
            ..BatchState::default()
        };
    }

    fn fail_batch(&mut self, err: BatchError) {
        tracing::warn!(error = %err, "Batch prediction failed");
        let err = err.to_string();
        self.ui.batch.error = Some(err.clone());
        self.set_status_message(StatusMessage::BatchFailed { err });
    }
}

fn is_csv_drop(file: &egui::DroppedFile) -> bool {
    let has_csv_extension = |path: &Path| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
    };
    match &file.path {
        Some(path) => has_csv_extension(path),
        None => has_csv_extension(Path::new(&file.name)),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
