use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use screening_core::{BatchId, UploadedFile};
use screening_logging::{screen_info, screen_warn};

use crate::export::{save_export, ExportClient, ExportSettings, ReqwestExportClient};
use crate::processor::{BatchProcessor, ChannelProgressSink, SimulatedProcessor, SimulatorSettings};
use crate::EngineEvent;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub simulator: SimulatorSettings,
    pub export: ExportSettings,
    /// Where exported spreadsheets are saved.
    pub download_dir: PathBuf,
}

enum EngineCommand {
    ProcessBatch {
        batch_id: BatchId,
        files: Vec<UploadedFile>,
    },
    DownloadExport,
}

struct Components {
    processor: Arc<dyn BatchProcessor>,
    exporter: Arc<dyn ExportClient>,
    download_dir: PathBuf,
    file_name: String,
}

/// Owns the background runtime; commands go in, `EngineEvent`s come out.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let processor = Arc::new(SimulatedProcessor::new(config.simulator));
        let exporter = Arc::new(ReqwestExportClient::new(config.export.clone()));
        Self::with_components(
            processor,
            exporter,
            config.download_dir,
            config.export.file_name,
        )
    }

    /// Wires arbitrary processor and export implementations, e.g. a real backend.
    pub fn with_components(
        processor: Arc<dyn BatchProcessor>,
        exporter: Arc<dyn ExportClient>,
        download_dir: PathBuf,
        file_name: String,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let components = Arc::new(Components {
            processor,
            exporter,
            download_dir,
            file_name,
        });

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let components = components.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(components.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn process(&self, batch_id: BatchId, files: Vec<UploadedFile>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ProcessBatch { batch_id, files });
    }

    pub fn download_export(&self) {
        let _ = self.cmd_tx.send(EngineCommand::DownloadExport);
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    components: &Components,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::ProcessBatch { batch_id, files } => {
            screen_info!("batch {} started with {} files", batch_id, files.len());
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = components.processor.process(batch_id, &files, &sink).await;
            if let Err(err) = &result {
                screen_warn!("batch {} failed: {}", batch_id, err);
            }
            let _ = event_tx.send(EngineEvent::BatchCompleted { batch_id, result });
        }
        EngineCommand::DownloadExport => {
            let result = match components.exporter.download().await {
                Ok(download) => save_export(
                    &components.download_dir,
                    &components.file_name,
                    &download.bytes,
                ),
                Err(err) => Err(err),
            };
            if let Err(err) = &result {
                screen_warn!("export failed: {}", err);
            }
            let _ = event_tx.send(EngineEvent::ExportCompleted { result });
        }
    }
}
