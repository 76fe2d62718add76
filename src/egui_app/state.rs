mod batch;
mod status;

pub use batch::*;
pub use status::*;

use crate::employee::FormState;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current values of the employee detail controls.
    pub form: FormState,
    pub status: StatusBarState,
    /// Outcome of the last Predict press, cleared when the form changes.
    pub prediction: Option<PredictionView>,
    pub batch: BatchState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            status: StatusBarState::idle(),
            prediction: None,
            batch: BatchState::default(),
        }
    }
}

/// Result of a single-record prediction as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictionView {
    Label(String),
    Failed(String),
}
