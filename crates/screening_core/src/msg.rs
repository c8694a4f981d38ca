use crate::{BatchId, CandidateResult, RoiInputs, Stage, Theme, UploadedFile};

/// How an export attempt ended, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked files through the file chooser.
    FilesSelected(Vec<UploadedFile>),
    /// A drag entered the drop zone.
    DragEntered,
    /// A drag left the drop zone without dropping.
    DragLeft,
    /// User dropped files onto the drop zone.
    FilesDropped(Vec<UploadedFile>),
    /// User removed one entry from the selected list.
    FileRemoved { index: usize },
    /// User clicked Process.
    ProcessClicked,
    /// Engine progress for a batch.
    BatchProgress { batch_id: BatchId, stage: Stage },
    /// Engine finished a batch.
    BatchCompleted {
        batch_id: BatchId,
        results: Vec<CandidateResult>,
    },
    /// Engine gave up on a batch.
    BatchFailed { batch_id: BatchId, reason: String },
    /// User focused one candidate in the results list.
    CandidateSelected { id: usize },
    SelectionCleared,
    /// User clicked Export.
    ExportClicked,
    ExportFinished { outcome: ExportOutcome },
    NotificationDismissed,
    /// User clicked "Process New Batch".
    ResetClicked,
    /// User opened or closed the ROI calculator.
    RoiToggled,
    RoiInputsChanged(RoiInputs),
    ThemeToggled,
    /// Theme loaded from persisted preferences at startup.
    ThemeRestored(Theme),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
