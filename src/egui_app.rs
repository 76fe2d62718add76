//! egui front end: state, controller and renderer.

/// Bridges user actions to prediction and updates [`state::UiState`].
pub mod controller;
/// Plain data consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
