use std::fmt;
use std::str::FromStr;

use crate::view_model::AppViewModel;
use crate::{AcceptedFileSet, BatchId, CandidateResult, RoiInputs, UploadedFile};

/// Which of the mutually exclusive page states is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Intake,
    Processing,
    Results,
}

/// Progress of the in-flight batch, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Queued,
    Extracting,
    Analyzing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One-line transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    files: AcceptedFileSet,
    phase: Phase,
    results: Vec<CandidateResult>,
    selected: Option<usize>,
    drag_over: bool,
    active_batch: Option<BatchId>,
    stage: Option<Stage>,
    next_batch_id: BatchId,
    exporting: bool,
    notification: Option<Notification>,
    roi_inputs: RoiInputs,
    roi_visible: bool,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_batch_id: 1,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn files(&self) -> &AcceptedFileSet {
        &self.files
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    pub fn show_results(&self) -> bool {
        self.phase == Phase::Results
    }

    pub fn results(&self) -> &[CandidateResult] {
        &self.results
    }

    pub fn selected(&self) -> Option<&CandidateResult> {
        let id = self.selected?;
        self.results.iter().find(|result| result.id == id)
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn active_batch(&self) -> Option<BatchId> {
        self.active_batch
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn roi_inputs(&self) -> RoiInputs {
        self.roi_inputs
    }

    pub fn roi_visible(&self) -> bool {
        self.roi_visible
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_drag_over(&mut self, drag_over: bool) {
        if self.drag_over != drag_over {
            self.drag_over = drag_over;
            self.mark_dirty();
        }
    }

    /// Appends allowed files. Returns how many were accepted.
    pub(crate) fn accept_files(&mut self, candidates: Vec<UploadedFile>) -> usize {
        let before = self.files.len();
        let files = std::mem::take(&mut self.files);
        self.files = files.accept(candidates);
        let accepted = self.files.len() - before;
        if accepted > 0 {
            if self.phase == Phase::Results {
                self.phase = Phase::Intake;
                self.selected = None;
            }
            self.mark_dirty();
        }
        accepted
    }

    pub(crate) fn remove_file(&mut self, index: usize) {
        if index >= self.files.len() {
            return;
        }
        let files = std::mem::take(&mut self.files);
        self.files = files.remove(index);
        self.mark_dirty();
    }

    /// Moves to the processing phase and returns the id of the new batch.
    pub(crate) fn begin_batch(&mut self) -> BatchId {
        let batch_id = self.next_batch_id.max(1);
        self.next_batch_id = batch_id + 1;
        self.active_batch = Some(batch_id);
        self.stage = Some(Stage::Queued);
        self.phase = Phase::Processing;
        self.selected = None;
        self.notification = None;
        self.mark_dirty();
        batch_id
    }

    pub(crate) fn is_current_batch(&self, batch_id: BatchId) -> bool {
        self.phase == Phase::Processing && self.active_batch == Some(batch_id)
    }

    pub(crate) fn apply_stage(&mut self, stage: Stage) {
        if self.stage != Some(stage) {
            self.stage = Some(stage);
            self.mark_dirty();
        }
    }

    pub(crate) fn complete_batch(&mut self, results: Vec<CandidateResult>) {
        self.results = results;
        self.active_batch = None;
        self.stage = None;
        self.phase = Phase::Results;
        self.mark_dirty();
    }

    pub(crate) fn fail_batch(&mut self, reason: String) {
        self.active_batch = None;
        self.stage = None;
        self.phase = Phase::Intake;
        self.notification = Some(Notification::error(reason));
        self.mark_dirty();
    }

    pub(crate) fn select(&mut self, id: usize) {
        if self.phase != Phase::Results || self.selected == Some(id) {
            return;
        }
        if self.results.iter().any(|result| result.id == id) {
            self.selected = Some(id);
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_exporting(&mut self, exporting: bool) {
        self.exporting = exporting;
        self.mark_dirty();
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Back to an empty intake. Theme, ROI inputs and an in-flight export survive.
    pub(crate) fn reset(&mut self) {
        self.files.clear();
        self.results.clear();
        self.selected = None;
        self.active_batch = None;
        self.stage = None;
        self.phase = Phase::Intake;
        self.drag_over = false;
        self.notification = None;
        self.mark_dirty();
    }

    pub(crate) fn toggle_roi(&mut self) {
        self.roi_visible = !self.roi_visible;
        self.mark_dirty();
    }

    pub(crate) fn set_roi_inputs(&mut self, inputs: RoiInputs) {
        if self.roi_inputs != inputs {
            self.roi_inputs = inputs;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.mark_dirty();
        }
    }
}
