use pretty_assertions::assert_eq;
use screening_core::{
    update, AppState, CandidateResult, Effect, ExportOutcome, Msg, NotificationLevel, Phase,
    RoiInputs, ScoreBand, Theme, UploadedFile, EXPORT_FAILURE_TEXT, EXPORT_SUCCESS_TEXT,
};

fn candidate(id: usize, score: u8) -> CandidateResult {
    CandidateResult {
        id,
        filename: format!("resume{id}.pdf"),
        name: format!("Candidate {}", id + 1),
        email: format!("candidate{}@email.com", id + 1),
        phone: format!("+1234567890{id}"),
        experience: format!("{} years", 2 + id),
        skills: ["JavaScript", "React", "Node.js", "Python", "SQL"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        software: vec!["Git".to_string()],
        domain: "Full Stack Development".to_string(),
        score,
    }
}

fn showing_results(scores: &[u8]) -> AppState {
    let files = (0..scores.len())
        .map(|i| UploadedFile::new(format!("resume{i}.pdf"), 1, "application/pdf"))
        .collect();
    let (state, _) = update(AppState::new(), Msg::FilesSelected(files));
    let (state, _) = update(state, Msg::ProcessClicked);
    let batch_id = state.active_batch().expect("batch in flight");
    let results = scores
        .iter()
        .enumerate()
        .map(|(id, score)| candidate(id, *score))
        .collect();
    update(state, Msg::BatchCompleted { batch_id, results }).0
}

#[test]
fn rows_carry_band_and_skill_preview() {
    let state = showing_results(&[95, 84, 70]);
    let view = state.view();

    let bands: Vec<_> = view.results.iter().map(|row| row.band).collect();
    assert_eq!(bands, vec![ScoreBand::Excellent, ScoreBand::Good, ScoreBand::Fair]);
    assert_eq!(view.results[0].skills_preview.len(), 4);
    assert_eq!(view.results[0].more_skills, 1);
}

#[test]
fn single_result_summary_is_singular() {
    let state = showing_results(&[88]);
    assert_eq!(
        state.view().summary.as_deref(),
        Some("Successfully processed 1 resume")
    );
}

#[test]
fn selection_replaces_previous_candidate() {
    let state = showing_results(&[90, 80]);

    let (state, _) = update(state, Msg::CandidateSelected { id: 0 });
    assert_eq!(state.view().selected.map(|c| c.id), Some(0));

    let (state, _) = update(state, Msg::CandidateSelected { id: 1 });
    let view = state.view();
    assert_eq!(view.selected.map(|c| c.id), Some(1));
    let flags: Vec<_> = view.results.iter().map(|row| row.selected).collect();
    assert_eq!(flags, vec![false, true]);

    let (state, _) = update(state, Msg::CandidateSelected { id: 9 });
    assert_eq!(state.view().selected.map(|c| c.id), Some(1));

    let (state, _) = update(state, Msg::SelectionCleared);
    assert!(state.view().selected.is_none());
}

#[test]
fn export_emits_download_once() {
    let state = showing_results(&[90]);

    let (state, effects) = update(state, Msg::ExportClicked);
    assert_eq!(effects, vec![Effect::DownloadExport]);
    assert!(state.view().exporting);

    let (state, effects) = update(state, Msg::ExportClicked);
    assert!(effects.is_empty());
    assert!(state.is_exporting());
}

#[test]
fn export_outside_results_is_ignored() {
    let (_, effects) = update(AppState::new(), Msg::ExportClicked);
    assert!(effects.is_empty());
}

#[test]
fn export_outcomes_become_notifications() {
    let state = showing_results(&[90]);
    let (state, _) = update(state, Msg::ExportClicked);
    let before_results = state.results().to_vec();

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            outcome: ExportOutcome::Failed {
                reason: "http status 500".to_string(),
            },
        },
    );
    let note = state.view().notification.expect("notification");
    assert_eq!(note.level, NotificationLevel::Error);
    assert_eq!(note.text, EXPORT_FAILURE_TEXT);
    assert!(!state.is_exporting());
    assert_eq!(state.phase(), Phase::Results);
    assert_eq!(state.results(), before_results.as_slice());

    let (state, _) = update(state, Msg::ExportClicked);
    let (state, _) = update(
        state,
        Msg::ExportFinished {
            outcome: ExportOutcome::Saved {
                path: "resumes_data.xlsx".to_string(),
            },
        },
    );
    let note = state.view().notification.expect("notification");
    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(note.text, EXPORT_SUCCESS_TEXT);

    let (state, _) = update(state, Msg::NotificationDismissed);
    assert!(state.view().notification.is_none());
}

#[test]
fn reset_returns_to_initial_page_state() {
    let state = showing_results(&[90, 75]);
    let (state, _) = update(state, Msg::CandidateSelected { id: 0 });

    let (state, effects) = update(state, Msg::ResetClicked);

    assert!(effects.is_empty());
    assert!(state.files().is_empty());
    assert!(!state.is_processing());
    assert!(state.results().is_empty());
    assert!(!state.show_results());
    assert!(state.selected().is_none());
}

#[test]
fn reset_drops_pending_notification() {
    let state = showing_results(&[90]);
    let (state, _) = update(state, Msg::ExportClicked);
    let (state, _) = update(
        state,
        Msg::ExportFinished {
            outcome: ExportOutcome::Failed {
                reason: "timeout".to_string(),
            },
        },
    );
    assert!(state.notification().is_some());

    let (state, _) = update(state, Msg::ResetClicked);
    assert!(state.notification().is_none());
}

#[test]
fn process_click_while_showing_results_is_ignored() {
    let state = showing_results(&[90]);

    let (next, effects) = update(state.clone(), Msg::ProcessClicked);

    assert!(effects.is_empty());
    assert_eq!(next.phase(), Phase::Results);
    assert_eq!(next.results(), state.results());
}

#[test]
fn new_files_while_showing_results_return_to_intake() {
    let state = showing_results(&[90]);

    let (state, _) = update(
        state,
        Msg::FilesSelected(vec![UploadedFile::new("next.pdf", 1, "application/pdf")]),
    );

    assert_eq!(state.phase(), Phase::Intake);
    assert!(!state.show_results());
    assert_eq!(state.files().len(), 2);
}

#[test]
fn roi_panel_only_visible_during_intake() {
    let (state, _) = update(AppState::new(), Msg::RoiToggled);
    let panel = state.view().roi.expect("roi panel");
    assert_eq!(panel.inputs, RoiInputs::default());
    assert_eq!(panel.report.manual_cost, 18_750.0);
    assert_eq!(panel.report.service_cost, 20_000.0);

    let inputs = RoiInputs {
        monthly_resumes: 100,
        minutes_per_resume: 30,
        hourly_rate: 60,
    };
    let (state, _) = update(state, Msg::RoiInputsChanged(inputs));
    let report = state.view().roi.expect("roi panel").report;
    assert_eq!(report.manual_cost, 3_000.0);
    assert_eq!(report.service_cost, 2_000.0);
    assert_eq!(report.monthly_savings, 1_000.0);
    assert_eq!(report.annual_savings, 12_000.0);
    assert_eq!(report.roi_percent, 50.0);

    let (state, _) = update(state, Msg::RoiToggled);
    assert!(state.view().roi.is_none());
}

#[test]
fn theme_toggle_persists_and_restore_does_not() {
    let (state, effects) = update(AppState::new(), Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(effects, vec![Effect::PersistTheme { theme: Theme::Dark }]);

    let (state, effects) = update(state, Msg::ThemeRestored(Theme::Light));
    assert_eq!(state.view().theme, Theme::Light);
    assert!(effects.is_empty());
}
