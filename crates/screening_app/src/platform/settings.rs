//! Host settings: a RON file with defaults, then command line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use screening_engine::{EngineConfig, ExportSettings, SimulatorSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_SETTINGS_FILE: &str = "screening.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse settings file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub server_url: String,
    pub download_dir: PathBuf,
    /// Where the theme preference is kept.
    pub state_dir: PathBuf,
    pub processing_delay_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_export_bytes: u64,
    pub export_file_name: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let export = ExportSettings::default();
        let simulator = SimulatorSettings::default();
        Self {
            server_url: export.base_url,
            download_dir: PathBuf::from("downloads"),
            state_dir: PathBuf::from("."),
            processing_delay_ms: simulator.delay.as_millis() as u64,
            connect_timeout_secs: export.connect_timeout.as_secs(),
            request_timeout_secs: export.request_timeout.as_secs(),
            max_export_bytes: export.max_bytes,
            export_file_name: export.file_name,
            log_file: None,
        }
    }
}

impl AppSettings {
    /// Loads `explicit` if given (it must exist), otherwise the default file if
    /// present, otherwise built-in defaults. Also returns the file that was read.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), SettingsError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !fallback.exists() {
                    return Ok((Self::default(), None));
                }
                fallback
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let settings = Self::parse(&content).map_err(|message| SettingsError::Parse {
            path: path.clone(),
            message,
        })?;
        Ok((settings, Some(path)))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.server_url = server.clone();
        }
        if let Some(dir) = &cli.download_dir {
            self.download_dir = dir.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            simulator: SimulatorSettings {
                delay: Duration::from_millis(self.processing_delay_ms),
            },
            export: ExportSettings {
                base_url: self.server_url.clone(),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                max_bytes: self.max_export_bytes,
                file_name: self.export_file_name.clone(),
            },
            download_dir: self.download_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings =
            AppSettings::parse(r#"(server_url: "http://10.1.1.1:8080", processing_delay_ms: 0)"#)
                .unwrap();

        assert_eq!(settings.server_url, "http://10.1.1.1:8080");
        assert_eq!(settings.processing_delay_ms, 0);
        assert_eq!(settings.export_file_name, "resumes_data.xlsx");
        assert_eq!(settings.download_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn explicit_file_is_reported_as_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("screening.ron");
        fs::write(&path, "(processing_delay_ms: 0)").unwrap();

        let (settings, source) = AppSettings::load(Some(&path)).unwrap();

        assert_eq!(settings.processing_delay_ms, 0);
        assert_eq!(source, Some(path));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = AppSettings::load(Some(&temp.path().join("nope.ron"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(server_url: 42").unwrap();

        let err = AppSettings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn cli_overrides_win() {
        let cli = Cli::parse_from([
            "screening",
            "--server",
            "http://export.local",
            "--download-dir",
            "out",
            "roi",
        ]);
        let mut settings = AppSettings::default();
        settings.apply_cli(&cli);

        let config = settings.engine_config();
        assert_eq!(config.export.base_url, "http://export.local");
        assert_eq!(config.download_dir, PathBuf::from("out"));
        assert_eq!(config.simulator.delay, Duration::from_secs(3));
    }
}
