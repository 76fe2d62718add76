mod support;

use std::sync::Arc;

use payscope::config::{self, AppSettings};
use payscope::egui_app::controller::AppController;
use payscope::egui_app::state::PredictionView;
use payscope::employee::{Education, FormState, Occupation};
use payscope::ml;
use payscope::table::Table;
use support::{bundled_model_path, payscope_env::PayscopeEnvGuard};

const UPLOAD: &str = "\
age,education,occupation,hours-per-week,experience,employee_id
25,HS-grad,Other-service,30,2,e-1
50,Masters,Exec-managerial,50,20,e-2
30,Bachelors,Tech-support,40,5,e-3
";

fn bundled_controller(settings: &AppSettings) -> AppController {
    let model = ml::load_model(&bundled_model_path()).expect("load bundled model");
    AppController::new(Arc::new(model), settings)
}

#[test]
fn bundled_model_classifies_form_profiles() {
    let mut controller = bundled_controller(&AppSettings::default());

    controller.ui.form = FormState::new(50, Education::Masters, Occupation::ExecManagerial, 50, 20);
    controller.predict_current();
    assert_eq!(
        controller.ui.prediction,
        Some(PredictionView::Label(">50K".into()))
    );

    controller.ui.form = FormState::new(25, Education::HsGrad, Occupation::OtherService, 30, 2);
    controller.sync_form();
    assert!(controller.ui.prediction.is_none());
    controller.predict_current();
    assert_eq!(
        controller.ui.prediction,
        Some(PredictionView::Label("<=50K".into()))
    );
}

#[test]
fn bundled_model_batch_appends_prediction_column() {
    let mut controller = bundled_controller(&AppSettings::default());

    controller.load_batch_bytes("staff.csv", UPLOAD.as_bytes());

    assert!(controller.ui.batch.error.is_none());
    let download = controller.download_bytes().expect("download ready");
    let table = Table::from_csv_bytes(download).expect("parse download");
    assert_eq!(
        table.headers().last().map(String::as_str),
        Some("PredictedClass")
    );
    assert_eq!(table.column_index("employee_id"), Some(5));
    let labels: Vec<&str> = table.column("PredictedClass").unwrap().collect();
    assert_eq!(labels, vec!["<=50K", ">50K", "<=50K"]);
}

#[test]
fn bundled_model_reports_missing_columns() {
    let mut controller = bundled_controller(&AppSettings::default());

    controller.load_batch_bytes("partial.csv", b"age,education\n30,Bachelors\n");

    let error = controller.ui.batch.error.as_deref().expect("error shown");
    assert!(error.contains("occupation"), "{error}");
    assert!(error.contains("hours-per-week"), "{error}");
    assert!(error.contains("experience"), "{error}");
    assert!(controller.ui.batch.uploaded_preview.is_some());
    assert!(controller.download_bytes().is_none());
}

#[test]
fn saved_download_matches_bytes_on_disk() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let mut controller = bundled_controller(&AppSettings::default());
    controller.load_batch_bytes("staff.csv", UPLOAD.as_bytes());

    let target = temp.path().join("predicted_classes.csv");
    controller.save_predictions_to(&target).expect("save predictions");

    let written = std::fs::read(&target).expect("read saved file");
    assert_eq!(Some(written.as_slice()), controller.download_bytes());
}

#[test]
fn config_home_override_feeds_batch_settings() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = PayscopeEnvGuard::set_config_home(temp.path().to_path_buf());
    let path = config::config_path().expect("config path");
    assert!(path.starts_with(temp.path()));
    std::fs::write(
        &path,
        "[batch]\npreview_rows = 1\nprediction_column = \"Band\"\n",
    )
    .expect("write config");

    let settings = config::load_or_default().expect("load config");
    let mut controller = bundled_controller(&settings);
    controller.load_batch_bytes("staff.csv", UPLOAD.as_bytes());

    let preview = controller.ui.batch.result_preview.as_ref().expect("preview");
    assert_eq!(preview.row_count(), 1);
    assert_eq!(preview.headers().last().map(String::as_str), Some("Band"));
}

#[test]
fn missing_config_uses_defaults() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = PayscopeEnvGuard::set_config_home(temp.path().to_path_buf());

    let settings = config::load_or_default().expect("load config");

    assert_eq!(settings, AppSettings::default());
}
