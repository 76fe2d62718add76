//! Single-record and batch prediction over a [`Classifier`].
//!
//! Every step returns an explicit error so the UI can render it and keep
//! running.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::employee::InputRecord;
use crate::ml::{Classifier, PredictError};
use crate::table::{Table, TableError};

/// Errors raised along the upload → predict → download pipeline.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse the uploaded file: {0}")]
    Parse(#[source] TableError),
    #[error("Prediction failed: {0}")]
    Predict(#[from] PredictError),
    #[error("Could not build the download: {0}")]
    Export(#[source] TableError),
}

/// Failure while writing the downloadable CSV to disk.
#[derive(Debug, Error)]
#[error("Failed to save predictions to {path}: {source}")]
pub struct ExportError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Augmented table plus its serialized CSV download.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPrediction {
    pub table: Table,
    pub csv: Vec<u8>,
}

/// Predict the label for a single form record.
pub fn predict_record(model: &dyn Classifier, record: &InputRecord) -> Result<String, PredictError> {
    let mut labels = model.predict(&record.to_table())?;
    match labels.len() {
        1 => Ok(labels.remove(0)),
        found => Err(PredictError::LabelCount { expected: 1, found }),
    }
}

/// Read an uploaded file from disk.
pub fn read_upload(path: &Path) -> Result<Vec<u8>, BatchError> {
    std::fs::read(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse uploaded bytes as a CSV table.
pub fn parse_upload(bytes: &[u8]) -> Result<Table, BatchError> {
    Table::from_csv_bytes(bytes).map_err(BatchError::Parse)
}

/// Predict every row of `uploaded` in one call and attach the labels as `column`.
pub fn predict_batch(
    model: &dyn Classifier,
    uploaded: &Table,
    column: &str,
) -> Result<BatchPrediction, BatchError> {
    let labels = model.predict(uploaded)?;
    if labels.len() != uploaded.row_count() {
        return Err(PredictError::LabelCount {
            expected: uploaded.row_count(),
            found: labels.len(),
        }
        .into());
    }
    let mut table = uploaded.clone();
    table
        .set_column(column, labels)
        .map_err(BatchError::Export)?;
    let csv = table.to_csv_bytes().map_err(BatchError::Export)?;
    Ok(BatchPrediction { table, csv })
}

/// Write the CSV download to `path`.
pub fn save_download(path: &Path, prediction: &BatchPrediction) -> Result<(), ExportError> {
    std::fs::write(path, &prediction.csv).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{Education, FormState, Occupation};

    struct FixedLabel(&'static str);

    impl Classifier for FixedLabel {
        fn predict(&self, table: &Table) -> Result<Vec<String>, PredictError> {
            Ok(vec![self.0.to_string(); table.row_count()])
        }
    }

    struct ShortBy(usize);

    impl Classifier for ShortBy {
        fn predict(&self, table: &Table) -> Result<Vec<String>, PredictError> {
            Ok(vec!["x".to_string(); table.row_count().saturating_sub(self.0)])
        }
    }

    struct Failing;

    impl Classifier for Failing {
        fn predict(&self, _table: &Table) -> Result<Vec<String>, PredictError> {
            Err(PredictError::MissingColumns {
                columns: vec!["age".into()],
            })
        }
    }

    const UPLOAD: &str = "age,education,occupation,hours-per-week,experience\n\
        30,Bachelors,Tech-support,40,5\n\
        52,PhD,Prof-specialty,60,25\n\
        19,HS-grad,Sales,20,0\n";

    #[test]
    fn scenario_record_gets_stub_label() {
        let form = FormState::new(30, Education::Bachelors, Occupation::TechSupport, 40, 5);
        let label = predict_record(&FixedLabel("<=50K"), &form.record()).unwrap();
        assert_eq!(label, "<=50K");
    }

    #[test]
    fn record_requires_exactly_one_label() {
        let record = FormState::default().record();
        let err = predict_record(&ShortBy(1), &record).unwrap_err();
        assert_eq!(err, PredictError::LabelCount { expected: 1, found: 0 });
    }

    #[test]
    fn batch_appends_label_to_every_row() {
        let uploaded = parse_upload(UPLOAD.as_bytes()).unwrap();
        let result = predict_batch(&FixedLabel(">50K"), &uploaded, "PredictedClass").unwrap();

        assert_eq!(result.table.row_count(), 3);
        assert_eq!(result.table.column_count(), uploaded.column_count() + 1);
        assert!(
            result
                .table
                .column("PredictedClass")
                .unwrap()
                .all(|label| label == ">50K")
        );
        for header in uploaded.headers() {
            let before: Vec<&str> = uploaded.column(header).unwrap().collect();
            let after: Vec<&str> = result.table.column(header).unwrap().collect();
            assert_eq!(before, after, "column {header} changed");
        }
    }

    #[test]
    fn download_reparses_to_augmented_table() {
        let uploaded = parse_upload(UPLOAD.as_bytes()).unwrap();
        let result = predict_batch(&FixedLabel("<=50K"), &uploaded, "PredictedClass").unwrap();

        let reparsed = Table::from_csv_bytes(&result.csv).unwrap();

        assert_eq!(reparsed, result.table);
        assert!(
            std::str::from_utf8(&result.csv)
                .unwrap()
                .starts_with("age,education,occupation,hours-per-week,experience,PredictedClass\n")
        );
    }

    #[test]
    fn existing_prediction_column_is_overwritten() {
        let uploaded = parse_upload(b"age,PredictedClass\n30,stale\n").unwrap();
        let result = predict_batch(&FixedLabel("fresh"), &uploaded, "PredictedClass").unwrap();
        assert_eq!(result.table.column_count(), 2);
        assert_eq!(result.table.cell(0, "PredictedClass"), Some("fresh"));
    }

    #[test]
    fn header_only_upload_yields_header_only_download() {
        let uploaded = parse_upload(b"age,education\n").unwrap();
        let result = predict_batch(&FixedLabel("x"), &uploaded, "PredictedClass").unwrap();
        assert_eq!(result.table.row_count(), 0);
        assert_eq!(result.csv, b"age,education,PredictedClass\n");
    }

    #[test]
    fn label_count_mismatch_is_a_predict_error() {
        let uploaded = parse_upload(UPLOAD.as_bytes()).unwrap();
        let err = predict_batch(&ShortBy(1), &uploaded, "PredictedClass").unwrap_err();
        assert!(matches!(
            err,
            BatchError::Predict(PredictError::LabelCount {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn model_failure_propagates() {
        let uploaded = parse_upload(UPLOAD.as_bytes()).unwrap();
        let err = predict_batch(&Failing, &uploaded, "PredictedClass").unwrap_err();
        assert!(err.to_string().contains("Missing required columns: age"));
    }

    #[test]
    fn malformed_upload_is_a_parse_error() {
        assert!(matches!(parse_upload(b""), Err(BatchError::Parse(_))));
        assert!(matches!(
            parse_upload(b"a,b\n1,2,3\n"),
            Err(BatchError::Parse(_))
        ));
    }

    #[test]
    fn read_and_save_use_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_upload(&dir.path().join("missing.csv")),
            Err(BatchError::Read { .. })
        ));

        let uploaded = parse_upload(UPLOAD.as_bytes()).unwrap();
        let result = predict_batch(&FixedLabel("x"), &uploaded, "PredictedClass").unwrap();
        let target = dir.path().join("predicted_classes.csv");
        save_download(&target, &result).unwrap();
        assert_eq!(read_upload(&target).unwrap(), result.csv);

        let err = save_download(&dir.path().join("no/such/dir/out.csv"), &result).unwrap_err();
        assert!(err.to_string().contains("out.csv"));
    }
}
