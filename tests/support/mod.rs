#![allow(dead_code)]

pub mod payscope_env;

use std::path::PathBuf;

/// Path of the model artifact shipped at the repository root.
pub fn bundled_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Champion_model.json")
}
