use crate::harness::SAMPLE_ENV;
use std::path::Path;
use taku::{AppError, Settings, write_env_at};
use tempfile::TempDir;

const SAMPLE_JSON: &str = r#"{
  "frontend": { "type": "vite", "buildCommand": "npm run build" },
  "backend": { "type": "node", "buildCommand": "node server.js" }
}"#;

#[test]
fn public_api_writes_env_file_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    std::fs::write(root.join("taku.config.json"), SAMPLE_JSON).unwrap();

    let outcome =
        write_env_at(root.clone(), None, None, Settings::default()).expect("write failed");

    assert_eq!(outcome.config_path, root.join("taku.config.json"));
    assert_eq!(outcome.output_path, root.join("taku.config.env"));
    assert_eq!(std::fs::read_to_string(&outcome.output_path).unwrap(), SAMPLE_ENV);
}

#[test]
fn public_api_rereads_config_within_one_process_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    let config = root.join("taku.config.json");

    std::fs::write(&config, r#"{"backend": {"buildCommand": "make"}}"#).unwrap();
    let first = write_env_at(root.clone(), None, None, Settings::default()).unwrap();
    std::fs::write(&config, r#"{"backend": {"buildCommand": "make release"}}"#).unwrap();
    let second = write_env_at(root.clone(), None, None, Settings::default()).unwrap();

    assert_eq!(first.record.get("BACKEND_BUILD_CMD"), Some("make"));
    assert_eq!(second.record.get("BACKEND_BUILD_CMD"), Some("make release"));
    assert!(
        std::fs::read_to_string(root.join("taku.config.env"))
            .unwrap()
            .contains("BACKEND_BUILD_CMD=\"make release\"\n")
    );
}

#[test]
fn public_api_injects_env_uuid_from_settings_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    std::fs::write(root.join("taku.config.json"), SAMPLE_JSON).unwrap();

    let settings = Settings { env_uuid: Some("abc-123".to_string()), ..Settings::default() };
    write_env_at(root.clone(), Some(Path::new("custom.env")), None, settings).unwrap();

    let written = std::fs::read_to_string(root.join("custom.env")).unwrap();
    assert!(
        written.ends_with("BACKEND_BUILD_CMD=\"node server.js\"\nTAKU_ENV_UUID=\"abc-123\"\n")
    );
    assert!(!root.join("taku.config.env").exists());
}

#[test]
fn public_api_load_failure_is_config_load_error_contract() {
    let temp = TempDir::new().unwrap();

    let err = write_env_at(temp.path(), None, None, Settings::default()).unwrap_err();

    assert!(matches!(err, AppError::ConfigLoad { .. }));
    assert!(!temp.path().join("taku.config.env").exists());
}
