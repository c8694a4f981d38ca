use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use screening_logging::{screen_debug, screen_info};

use crate::filename::available_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::{ExportDownload, ExportError, ExportMetadata, FailureKind};

pub const EXPORT_PATH: &str = "/api/download-excel";

// How many times a freshly chosen name may be taken by someone else before giving up.
const MAX_NAME_ATTEMPTS: usize = 32;

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Name the spreadsheet is saved under.
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 50 * 1024 * 1024,
            file_name: "resumes_data.xlsx".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait ExportClient: Send + Sync {
    async fn download(&self) -> Result<ExportDownload, ExportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExportClient {
    settings: ExportSettings,
}

impl ReqwestExportClient {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    fn export_url(&self) -> Result<reqwest::Url, ExportError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ExportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        base.join(EXPORT_PATH)
            .map_err(|err| ExportError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, ExportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ExportError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> ExportError {
        ExportError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "export too large",
        )
    }
}

#[async_trait::async_trait]
impl ExportClient for ReqwestExportClient {
    async fn download(&self) -> Result<ExportDownload, ExportError> {
        let url = self.export_url()?;
        let client = self.build_client()?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = ExportMetadata {
            url: url.to_string(),
            content_type,
            byte_len: bytes.len() as u64,
        };
        Ok(ExportDownload { bytes, metadata })
    }
}

/// Saves a downloaded spreadsheet under `dir` without clobbering earlier downloads.
pub fn save_export(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    for _ in 0..MAX_NAME_ATTEMPTS {
        let name = available_filename(writer.dir(), file_name);
        match writer.write_new(&name, bytes) {
            Ok(path) => {
                screen_info!("export saved to {:?} ({} bytes)", path, bytes.len());
                return Ok(path);
            }
            Err(PersistError::Exists(path)) => {
                screen_debug!("{:?} appeared before the export landed, trying another name", path);
            }
            Err(err) => return Err(ExportError::new(FailureKind::Write, err.to_string())),
        }
    }
    Err(ExportError::new(
        FailureKind::Write,
        format!("no free file name for {file_name} in {}", dir.display()),
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> ExportError {
    if err.is_timeout() {
        return ExportError::new(FailureKind::Timeout, err.to_string());
    }
    ExportError::new(FailureKind::Network, err.to_string())
}
