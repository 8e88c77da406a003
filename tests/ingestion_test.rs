use brewery_ingest::{ExecutionDate, IngestConfig, IngestionError, IngestionJob};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn config_for(server: &MockServer, base_path: &Path) -> IngestConfig {
    IngestConfig {
        api_endpoint: server.url("/v1/breweries"),
        base_path: base_path.to_str().unwrap().to_string(),
        ..Default::default()
    }
}

fn read_landing(path: &Path) -> Vec<serde_json::Value> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn test_run_writes_partitioned_landing_file() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/breweries")
            .query_param("per_page", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"[{"id":"1","name":"Brewery One"},{"id":"2","name":"Brewery Two"}]"#);
    });

    let job = IngestionJob::from_config(&config_for(&server, temp_dir.path()), false).unwrap();
    let date = ExecutionDate::parse("2026-02-01").unwrap();

    let report = assert_ok!(job.run(&date, 2).await);

    api_mock.assert();
    let expected_path = temp_dir.path().join("2026-02-01").join("list_breweries.json");
    assert_eq!(report.landing_path, expected_path);
    assert_eq!(report.record_count, 2);
    assert_eq!(
        read_landing(&expected_path),
        vec![
            serde_json::json!({"id": "1", "name": "Brewery One"}),
            serde_json::json!({"id": "2", "name": "Brewery Two"}),
        ]
    );
}

#[tokio::test]
async fn test_empty_response_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let job = IngestionJob::from_config(&config_for(&server, temp_dir.path()), false).unwrap();
    let date = ExecutionDate::parse("2026-02-01").unwrap();

    let err = assert_err!(job.run(&date, 50).await);

    api_mock.assert();
    assert!(matches!(err, IngestionError::EmptyDataset));
    assert!(!temp_dir.path().join("2026-02-01").exists());
}

#[tokio::test]
async fn test_timeout_reports_configured_seconds() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .delay(std::time::Duration::from_secs(3))
            .json_body(serde_json::json!([{"id": "1"}]));
    });

    let config = IngestConfig {
        timeout_seconds: 1,
        ..config_for(&server, temp_dir.path())
    };
    let job = IngestionJob::from_config(&config, false).unwrap();
    let date = ExecutionDate::parse("2026-02-01").unwrap();

    let err = assert_err!(job.run(&date, 50).await);

    assert!(matches!(err, IngestionError::Timeout { seconds: 1 }));
    assert!(err.to_string().contains("1s"));
    assert!(err.is_retryable());
    assert!(!temp_dir.path().join("2026-02-01").exists());
}

#[tokio::test]
async fn test_second_run_overwrites_first() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let date = ExecutionDate::parse("2026-02-01").unwrap();
    let config = config_for(&server, temp_dir.path());

    let mut first = server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200).json_body(serde_json::json!([
            {"id": "1", "name": "Brewery One"},
            {"id": "2", "name": "Brewery Two"},
            {"id": "3", "name": "Brewery Three"}
        ]));
    });
    let job = IngestionJob::from_config(&config, false).unwrap();
    let first_path = assert_ok!(job.run(&date, 3).await).landing_path;
    first.assert();
    first.delete();

    let second = server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .json_body(serde_json::json!([{"id": "9", "name": "Brewery Nine"}]));
    });
    let second_path = assert_ok!(job.run(&date, 3).await).landing_path;
    second.assert();

    assert_eq!(first_path, second_path);
    assert_eq!(
        read_landing(&second_path),
        vec![serde_json::json!({"id": "9", "name": "Brewery Nine"})]
    );
}

#[tokio::test]
async fn test_identical_runs_produce_identical_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .body(r#"[{"name":"Zymurgy","id":"z","city":"Łódź"},{"id":"a","name":"Alpha"}]"#);
    });

    let job = IngestionJob::from_config(&config_for(&server, temp_dir.path()), false).unwrap();
    let date = ExecutionDate::parse("2026-02-01").unwrap();

    let path = assert_ok!(job.run(&date, 2).await).landing_path;
    let first = std::fs::read(&path).unwrap();
    assert_ok!(job.run(&date, 2).await);
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(second).unwrap();
    // key order from the API is kept and non-ASCII text is not escaped
    assert!(text.starts_with("[\n  {\n    \"name\": \"Zymurgy\",\n    \"id\": \"z\","));
    assert!(text.contains("Łódź"));
}

#[tokio::test]
async fn test_unwritable_base_path_fails_after_fetch() {
    let temp_dir = TempDir::new().unwrap();
    // a regular file where the landing root should be a directory
    let blocker = temp_dir.path().join("landing");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200).json_body(serde_json::json!([{"id": "1"}]));
    });

    let job = IngestionJob::from_config(&config_for(&server, &blocker), false).unwrap();
    let date = ExecutionDate::parse("2026-02-01").unwrap();

    let err = assert_err!(job.run(&date, 1).await);

    api_mock.assert();
    assert!(matches!(err, IngestionError::Storage { .. }));
    assert_eq!(err.exit_code(), 3);
}
