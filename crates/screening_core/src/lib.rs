//! Screening core: pure state machine, intake rules and view-model helpers.
mod candidate;
mod effect;
mod file;
mod intake;
mod msg;
mod roi;
mod state;
mod update;
mod view_model;

pub use candidate::{BatchId, CandidateResult, ScoreBand};
pub use effect::Effect;
pub use file::{
    format_file_size, is_allowed_file, mime_type_for_name, UploadedFile, ALLOWED_EXTENSIONS,
    ALLOWED_MIME_TYPES,
};
pub use intake::AcceptedFileSet;
pub use msg::{ExportOutcome, Msg};
pub use roi::{RoiInputs, RoiReport, SERVICE_PRICE_PER_RESUME};
pub use state::{AppState, Notification, NotificationLevel, Phase, Stage, Theme};
pub use update::{update, EXPORT_FAILURE_TEXT, EXPORT_SUCCESS_TEXT};
pub use view_model::{
    AppViewModel, CandidateRowView, FileRowView, LoaderStepView, LoaderView, RoiPanelView,
    StepStatus, SKILL_PREVIEW_LIMIT,
};
