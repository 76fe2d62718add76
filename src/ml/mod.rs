//! Classifier seam used by the UI, and the bundled model format.
//!
//! The UI only needs `predict(table) -> labels`; anything implementing
//! [`Classifier`] can stand in for the loaded artifact.

pub mod champion;
pub mod gbdt_stump;

pub use champion::{ChampionModel, ColumnEncoding, FeatureColumn, ModelLoadError, load_model};

use thiserror::Error;

use crate::table::Table;

/// A trained model that maps table rows to class labels.
pub trait Classifier: Send + Sync {
    /// Predict one label per row of `table`, in row order.
    fn predict(&self, table: &Table) -> Result<Vec<String>, PredictError>;
}

/// Failures raised while running inference over a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The table lacks columns the model was trained on.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    /// A categorical cell holds a value the model never saw.
    #[error("Row {row}: unknown {column} value {value:?}")]
    UnknownCategory {
        column: String,
        row: usize,
        value: String,
    },
    /// A numeric cell could not be parsed as a finite number.
    #[error("Row {row}: {column} value {value:?} is not a number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    /// The model returned a different number of labels than rows.
    #[error("Model returned {found} labels for {expected} rows")]
    LabelCount { expected: usize, found: usize },
    /// Any other model-internal failure.
    #[error("Model error: {0}")]
    Model(String),
}
