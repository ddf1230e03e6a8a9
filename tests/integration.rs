// SPDX-License-Identifier: MPL-2.0
use neuro_lens::config::{self, Config};
use neuro_lens::domain::Stage;
use neuro_lens::workflow::{SelectedScan, SubmitOutcome, Workflow, WorkflowState};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_config_round_trip_preserves_api_section() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.api.base_url = Some("http://localhost:5000".to_string());
    config.api.min_latency_ms = Some(0);
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded.api.base_url.as_deref(), Some("http://localhost:5000"));
    assert_eq!(loaded.min_latency(), Duration::ZERO);
    assert_eq!(
        loaded.request_timeout(),
        Duration::from_secs(config::DEFAULT_REQUEST_TIMEOUT_SECS)
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_malformed_config_reports_warning_and_falls_back() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "this is [not toml").expect("Failed to write file");

    assert!(config::load_from_path(&config_path).is_err());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_real_png_selection_flows_into_submission() {
    use image_rs::{Rgba, RgbaImage};

    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("scan.png");
    let img = RgbaImage::from_pixel(8, 8, Rgba([40, 40, 40, 255]));
    img.save(&path).expect("Failed to write png");
    let bytes = std::fs::read(&path).expect("Failed to read png back");

    let mut workflow = Workflow::new();
    workflow.select_file(SelectedScan::from_bytes("scan.png", bytes));

    assert!(workflow.preview().is_some());
    let SubmitOutcome::Started { scan, .. } = workflow.begin_submission() else {
        panic!("expected submission to start");
    };
    assert_eq!(scan.mime_type, "image/png");
    assert!(scan.size() > 0);
    assert!(matches!(
        workflow.state(),
        WorkflowState::Loading { .. }
    ));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_stage_vocabulary_matches_service_labels() {
    // Every label the service can emit maps to a stage; arbitrary text does not.
    for (label, stage) in [
        ("Non Demented", Stage::NonDemented),
        ("Very Mild Demented", Stage::VeryMildDemented),
        ("Mild Demented", Stage::MildDemented),
        ("Moderate Demented", Stage::ModerateDemented),
    ] {
        assert_eq!(Stage::from_label(label), Some(stage));
    }
    assert_eq!(Stage::from_label("Glioma"), None);
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_transport_error() {
    use neuro_lens::api::{classify_after_delay, PredictClient};

    // TEST-NET-1 address, guaranteed unroutable.
    let client = PredictClient::new("http://192.0.2.1:9", Duration::from_millis(200))
        .expect("client should build");
    let scan = SelectedScan::from_bytes("scan.png", vec![0x89, 0x50, 0x4E, 0x47]);

    let result = classify_after_delay(client, scan, Duration::ZERO).await;
    assert!(result.is_err());
}
