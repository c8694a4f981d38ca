use crate::{AppState, Effect, ExportOutcome, Msg, Notification, Phase};

pub const EXPORT_SUCCESS_TEXT: &str = "Excel file downloaded successfully!";
pub const EXPORT_FAILURE_TEXT: &str = "Failed to download Excel file.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(files) => {
            if !state.is_processing() {
                state.accept_files(files);
            }
            Vec::new()
        }
        Msg::DragEntered => {
            state.set_drag_over(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_over(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_drag_over(false);
            if !state.is_processing() {
                state.accept_files(files);
            }
            Vec::new()
        }
        Msg::FileRemoved { index } => {
            if !state.is_processing() {
                state.remove_file(index);
            }
            Vec::new()
        }
        Msg::ProcessClicked => {
            // A second click while a batch is in flight is rejected outright.
            if state.phase() != Phase::Intake || state.files().is_empty() {
                return (state, Vec::new());
            }
            let files = state.files().as_slice().to_vec();
            let batch_id = state.begin_batch();
            vec![Effect::ProcessBatch { batch_id, files }]
        }
        Msg::BatchProgress { batch_id, stage } => {
            if state.is_current_batch(batch_id) {
                state.apply_stage(stage);
            }
            Vec::new()
        }
        Msg::BatchCompleted { batch_id, results } => {
            if state.is_current_batch(batch_id) {
                state.complete_batch(results);
            }
            Vec::new()
        }
        Msg::BatchFailed { batch_id, reason } => {
            if state.is_current_batch(batch_id) {
                state.fail_batch(reason);
            }
            Vec::new()
        }
        Msg::CandidateSelected { id } => {
            state.select(id);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::ExportClicked => {
            if state.phase() == Phase::Results && !state.is_exporting() {
                state.set_exporting(true);
                vec![Effect::DownloadExport]
            } else {
                Vec::new()
            }
        }
        Msg::ExportFinished { outcome } => {
            if state.is_exporting() {
                state.set_exporting(false);
                let notification = match outcome {
                    ExportOutcome::Saved { .. } => Notification::success(EXPORT_SUCCESS_TEXT),
                    ExportOutcome::Failed { .. } => Notification::error(EXPORT_FAILURE_TEXT),
                };
                state.notify(notification);
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::RoiToggled => {
            state.toggle_roi();
            Vec::new()
        }
        Msg::RoiInputsChanged(inputs) => {
            state.set_roi_inputs(inputs);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme { theme }]
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
