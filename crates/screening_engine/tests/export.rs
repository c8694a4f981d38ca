use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use screening_engine::{
    save_export, ExportClient, ExportSettings, FailureKind, ReqwestExportClient, EXPORT_PATH,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn settings_for(server: &MockServer) -> ExportSettings {
    ExportSettings {
        base_url: server.uri(),
        ..ExportSettings::default()
    }
}

#[tokio::test]
async fn download_returns_spreadsheet_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"PK\x03\x04sheet".to_vec(), XLSX))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestExportClient::new(settings_for(&server));
    let download = client.download().await.expect("download ok");

    assert_eq!(download.bytes, b"PK\x03\x04sheet");
    assert_eq!(download.metadata.byte_len, 8);
    assert_eq!(download.metadata.content_type.as_deref(), Some(XLSX));
    assert!(download.metadata.url.ends_with(EXPORT_PATH));
}

#[tokio::test]
async fn non_ok_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestExportClient::new(settings_for(&server));
    let err = client.download().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = ExportSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestExportClient::new(settings);
    let err = client.download().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_export_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("01234567890"))
        .mount(&server)
        .await;

    let settings = ExportSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let client = ReqwestExportClient::new(settings);
    let err = client.download().await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let settings = ExportSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_millis(200),
        ..ExportSettings::default()
    };
    let client = ReqwestExportClient::new(settings);
    let err = client.download().await.unwrap_err();

    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}

#[test]
fn invalid_base_url_is_reported() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ReqwestExportClient::new(ExportSettings {
        base_url: "not a url".to_string(),
        ..ExportSettings::default()
    });

    let err = runtime.block_on(client.download()).unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[test]
fn saved_exports_never_overwrite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("downloads");

    let first = save_export(&dir, "resumes_data.xlsx", b"one").unwrap();
    let second = save_export(&dir, "resumes_data.xlsx", b"two").unwrap();

    assert_eq!(first.file_name().unwrap(), "resumes_data.xlsx");
    assert_eq!(second.file_name().unwrap(), "resumes_data (1).xlsx");
    assert_eq!(fs::read(&first).unwrap(), b"one");
    assert_eq!(fs::read(&second).unwrap(), b"two");
}
