use std::path::PathBuf;

use crate::table::Table;

/// Batch upload section of the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchState {
    /// Name of the uploaded file, if any.
    pub file_name: Option<String>,
    /// Leading rows of the uploaded table.
    pub uploaded_preview: Option<Table>,
    pub uploaded_rows: usize,
    /// Leading rows of the table with predictions attached.
    pub result_preview: Option<Table>,
    /// Parse or predict failure for the current upload.
    pub error: Option<String>,
    /// Where the download was last written.
    pub saved_to: Option<PathBuf>,
}

impl BatchState {
    pub fn has_upload(&self) -> bool {
        self.file_name.is_some()
    }

    pub fn has_result(&self) -> bool {
        self.result_preview.is_some()
    }
}
