//! Library exports for reuse in the binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent settings stored in the app directory.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Employee form values and the single-row input record.
pub mod employee;
/// Tracing setup and log file rotation.
pub mod logging;
/// Salary classifier model and its JSON artifact.
pub mod ml;
/// Single and batch prediction over tables.
pub mod prediction;
/// Header-plus-rows CSV tables.
pub mod table;
