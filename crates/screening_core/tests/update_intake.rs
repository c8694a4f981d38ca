use std::sync::Once;

use screening_core::{update, AppState, Msg, Phase, UploadedFile};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(screening_logging::initialize_for_tests);
}

fn pdf(name: &str) -> UploadedFile {
    UploadedFile::new(name, 2048, "application/pdf")
}

fn names(state: &AppState) -> Vec<String> {
    state.files().iter().map(|file| file.name.clone()).collect()
}

#[test]
fn non_resume_files_are_dropped_silently() {
    init_logging();
    let files = vec![pdf("resume.pdf"), UploadedFile::new("cover.txt", 10, "text/plain")];

    let (mut state, effects) = update(AppState::new(), Msg::FilesSelected(files));

    assert_eq!(names(&state), vec!["resume.pdf"]);
    assert!(effects.is_empty());
    assert!(state.view().notification.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn extension_alone_or_mime_alone_is_accepted() {
    init_logging();
    let files = vec![
        UploadedFile::new("CV.DOCX", 1, "application/octet-stream"),
        UploadedFile::new("scan", 1, "application/msword"),
        UploadedFile::new("photo.png", 1, "image/png"),
        UploadedFile::new("notes.Doc", 1, ""),
    ];

    let (state, _) = update(AppState::new(), Msg::FilesSelected(files));

    assert_eq!(names(&state), vec!["CV.DOCX", "scan", "notes.Doc"]);
}

#[test]
fn selections_append_in_order() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FilesSelected(vec![pdf("a.pdf")]));
    let (state, _) = update(
        state,
        Msg::FilesDropped(vec![UploadedFile::new("b.docx", 1, "")]),
    );
    // Duplicate names are kept.
    let (state, _) = update(state, Msg::FilesSelected(vec![pdf("a.pdf")]));

    assert_eq!(names(&state), vec!["a.pdf", "b.docx", "a.pdf"]);
}

#[test]
fn fully_rejected_selection_leaves_state_untouched() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::FilesSelected(vec![pdf("a.pdf")]));
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(
        state,
        Msg::FilesSelected(vec![UploadedFile::new("x.exe", 1, "")]),
    );

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn remove_drops_one_index_and_keeps_order() {
    init_logging();
    let files = vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")];
    let (state, _) = update(AppState::new(), Msg::FilesSelected(files));

    let (state, effects) = update(state, Msg::FileRemoved { index: 1 });

    assert_eq!(names(&state), vec!["a.pdf", "c.pdf"]);
    assert!(effects.is_empty());
}

#[test]
fn remove_out_of_range_is_noop() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::FilesSelected(vec![pdf("a.pdf")]));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::FileRemoved { index: 5 });

    assert_eq!(names(&state), vec!["a.pdf"]);
    assert!(!state.consume_dirty());
}

#[test]
fn drag_over_toggles_and_clears_on_drop() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DragEntered);
    assert!(state.view().drag_over);

    let (state, _) = update(state, Msg::DragLeft);
    assert!(!state.view().drag_over);

    let (state, _) = update(state, Msg::DragEntered);
    let (state, _) = update(state, Msg::FilesDropped(vec![pdf("a.pdf")]));
    let view = state.view();
    assert!(!view.drag_over);
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.files[0].size_label, "2 KB");
}

#[test]
fn intake_view_lists_files_and_enables_processing() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.phase, Phase::Intake);
    assert!(!view.can_process);

    let (state, _) = update(AppState::new(), Msg::FilesSelected(vec![pdf("a.pdf")]));
    let view = state.view();
    assert!(view.can_process);
    assert_eq!(view.files[0].index, 0);
    assert_eq!(view.files[0].name, "a.pdf");
}
