//! JSON "champion" pipeline: column encoding followed by boosted stumps.
//!
//! Numeric columns contribute one feature each; categorical columns are
//! one-hot encoded over their trained categories and reject anything else.
//! Columns in the input table that the model does not list are ignored.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gbdt_stump::StumpBooster;
use super::{Classifier, PredictError};
use crate::table::Table;

/// Model format version understood by this build.
pub const CHAMPION_MODEL_VERSION: i64 = 1;

/// How a table column is turned into features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnEncoding {
    Numeric,
    Categorical { categories: Vec<String> },
}

impl ColumnEncoding {
    fn width(&self) -> usize {
        match self {
            ColumnEncoding::Numeric => 1,
            ColumnEncoding::Categorical { categories } => categories.len(),
        }
    }
}

/// Named input column and its encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureColumn {
    pub name: String,
    #[serde(flatten)]
    pub encoding: ColumnEncoding,
}

/// Versioned classifier artifact loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionModel {
    pub model_version: i64,
    /// Input columns in encoding order.
    pub columns: Vec<FeatureColumn>,
    /// Ordered list of class labels.
    pub classes: Vec<String>,
    #[serde(flatten)]
    pub booster: StumpBooster,
}

/// Errors raised while loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Model file {path} is not a valid champion model: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Model file {path} is inconsistent: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Read, parse and validate the model artifact at `path`.
pub fn load_model(path: &Path) -> Result<ChampionModel, ModelLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let model: ChampionModel =
        serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    model.validate().map_err(|reason| ModelLoadError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(
        path = %path.display(),
        columns = model.columns.len(),
        classes = model.classes.len(),
        rounds = model.booster.stumps.len(),
        "Loaded champion model"
    );
    Ok(model)
}

impl ChampionModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_version != CHAMPION_MODEL_VERSION {
            return Err(format!(
                "Unsupported model_version {} (expected {CHAMPION_MODEL_VERSION})",
                self.model_version
            ));
        }
        if self.classes.len() < 2 {
            return Err("Model must contain at least 2 classes".to_string());
        }
        if self.columns.is_empty() {
            return Err("Model must declare at least one input column".to_string());
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.is_empty() {
                return Err("Column names must not be empty".to_string());
            }
            if !seen.insert(column.name.as_str()) {
                return Err(format!("Column {} is declared twice", column.name));
            }
            if column.encoding.width() == 0 {
                return Err(format!("Categorical column {} has no categories", column.name));
            }
        }
        self.booster
            .validate(self.classes.len(), self.feature_len())
    }

    /// Length of the encoded feature vector.
    pub fn feature_len(&self) -> usize {
        self.columns.iter().map(|column| column.encoding.width()).sum()
    }

    fn resolve_columns(&self, table: &Table) -> Result<Vec<usize>, PredictError> {
        let mut indices = Vec::with_capacity(self.columns.len());
        let mut missing = Vec::new();
        for column in &self.columns {
            match table.column_index(&column.name) {
                Some(index) => indices.push(index),
                None => missing.push(column.name.clone()),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(PredictError::MissingColumns { columns: missing })
        }
    }

    fn encode_row(
        &self,
        row_idx: usize,
        cells: &[String],
        indices: &[usize],
        features: &mut Vec<f32>,
    ) -> Result<(), PredictError> {
        features.clear();
        for (column, &cell_idx) in self.columns.iter().zip(indices) {
            let cell = cells[cell_idx].trim();
            match &column.encoding {
                ColumnEncoding::Numeric => {
                    let value = cell
                        .parse::<f32>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| PredictError::InvalidNumber {
                            column: column.name.clone(),
                            row: row_idx,
                            value: cell.to_string(),
                        })?;
                    features.push(value);
                }
                ColumnEncoding::Categorical { categories } => {
                    let hot = categories
                        .iter()
                        .position(|category| category == cell)
                        .ok_or_else(|| PredictError::UnknownCategory {
                            column: column.name.clone(),
                            row: row_idx,
                            value: cell.to_string(),
                        })?;
                    features.extend((0..categories.len()).map(|idx| f32::from(idx == hot)));
                }
            }
        }
        Ok(())
    }
}

impl Classifier for ChampionModel {
    fn predict(&self, table: &Table) -> Result<Vec<String>, PredictError> {
        let indices = self.resolve_columns(table)?;
        let mut features = Vec::with_capacity(self.feature_len());
        let mut labels = Vec::with_capacity(table.row_count());
        for (row_idx, cells) in table.rows().iter().enumerate() {
            self.encode_row(row_idx, cells, &indices, &mut features)?;
            let class_idx = self.booster.predict_class_index(&features);
            let label = self.classes.get(class_idx).ok_or_else(|| {
                PredictError::Model(format!("class index {class_idx} out of range"))
            })?;
            labels.push(label.clone());
        }
        Ok(labels)
    }
}
