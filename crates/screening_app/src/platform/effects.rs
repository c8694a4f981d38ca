use std::path::PathBuf;
use std::time::Duration;

use screening_core::{Effect, ExportOutcome, Msg};
use screening_engine::{EngineConfig, EngineEvent, EngineHandle};
use screening_logging::{screen_info, screen_warn};

use super::persistence;

/// Executes reducer effects and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, state_dir: PathBuf) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(config)?,
            state_dir,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProcessBatch { batch_id, files } => {
                    screen_info!("ProcessBatch batch_id={} files={}", batch_id, files.len());
                    self.engine.process(batch_id, files);
                }
                Effect::DownloadExport => {
                    screen_info!("DownloadExport");
                    self.engine.download_export();
                }
                Effect::PersistTheme { theme } => {
                    persistence::save_theme(&self.state_dir, theme);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::BatchProgress {
            batch_id: progress.batch_id,
            stage: progress.stage,
        },
        EngineEvent::BatchCompleted { batch_id, result } => match result {
            Ok(results) => Msg::BatchCompleted { batch_id, results },
            Err(err) => {
                screen_warn!("Batch {} failed: {}", batch_id, err);
                Msg::BatchFailed {
                    batch_id,
                    reason: "Failed to process resumes.".to_string(),
                }
            }
        },
        EngineEvent::ExportCompleted { result } => {
            let outcome = match result {
                Ok(path) => ExportOutcome::Saved {
                    path: path.display().to_string(),
                },
                Err(err) => ExportOutcome::Failed {
                    reason: err.to_string(),
                },
            };
            Msg::ExportFinished { outcome }
        }
    }
}
