//! Screening engine: batch processing, export download and effect execution.
mod engine;
mod export;
mod filename;
mod persist;
mod processor;
mod types;

pub use engine::{EngineConfig, EngineHandle};
pub use export::{save_export, ExportClient, ExportSettings, ReqwestExportClient, EXPORT_PATH};
pub use filename::{available_filename, sanitize_filename};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use processor::{
    simulated_candidate, BatchProcessor, ChannelProgressSink, FixedScores, ProgressSink,
    RandomScores, ScoreSource, SimulatedProcessor, SimulatorSettings, SIMULATED_DOMAIN,
    SIMULATED_SKILLS, SIMULATED_SOFTWARE,
};
pub use types::{
    BatchProgress, EngineEvent, ExportDownload, ExportError, ExportMetadata, FailureKind,
    ProcessError,
};
