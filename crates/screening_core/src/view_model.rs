use crate::{
    AppState, CandidateResult, Notification, Phase, RoiInputs, RoiReport, ScoreBand, Stage, Theme,
};

/// Number of skills listed on a result row before collapsing into "+N more".
pub const SKILL_PREVIEW_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub is_processing: bool,
    pub show_results: bool,
    pub drag_over: bool,
    pub files: Vec<FileRowView>,
    pub can_process: bool,
    pub loader: Option<LoaderView>,
    pub summary: Option<String>,
    pub results: Vec<CandidateRowView>,
    pub selected: Option<CandidateResult>,
    pub exporting: bool,
    pub notification: Option<Notification>,
    pub roi: Option<RoiPanelView>,
    pub theme: Theme,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub index: usize,
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderView {
    pub file_count: usize,
    pub headline: String,
    pub steps: Vec<LoaderStepView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderStepView {
    pub title: &'static str,
    pub detail: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRowView {
    pub id: usize,
    pub filename: String,
    pub name: String,
    pub experience: String,
    pub score: u8,
    pub band: ScoreBand,
    pub skills_preview: Vec<String>,
    pub more_skills: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiPanelView {
    pub inputs: RoiInputs,
    pub report: RoiReport,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let files = state
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileRowView {
                index,
                name: file.name.clone(),
                size_label: file.size_label(),
            })
            .collect();

        let loader = state
            .is_processing()
            .then(|| build_loader(state.files().len(), state.stage().unwrap_or(Stage::Queued)));

        let selected = state.selected().cloned();
        let selected_id = selected.as_ref().map(|candidate| candidate.id);

        let (summary, results) = if state.show_results() {
            let rows = state
                .results()
                .iter()
                .map(|result| build_row(result, selected_id == Some(result.id)))
                .collect();
            (Some(summary_line(state.results().len())), rows)
        } else {
            (None, Vec::new())
        };

        // The calculator competes for the same space as the loader and results.
        let roi = (state.roi_visible() && state.phase() == Phase::Intake).then(|| {
            let inputs = state.roi_inputs();
            RoiPanelView {
                inputs,
                report: inputs.report(),
            }
        });

        Self {
            phase: state.phase(),
            is_processing: state.is_processing(),
            show_results: state.show_results(),
            drag_over: state.drag_over(),
            files,
            can_process: state.phase() != Phase::Processing && !state.files().is_empty(),
            loader,
            summary,
            results,
            selected,
            exporting: state.is_exporting(),
            notification: state.notification().cloned(),
            roi,
            theme: state.theme(),
            dirty: state.is_dirty(),
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn summary_line(count: usize) -> String {
    format!("Successfully processed {count} resume{}", plural(count))
}

fn build_loader(file_count: usize, stage: Stage) -> LoaderView {
    let status_for = |step: Stage| {
        if stage > step {
            StepStatus::Complete
        } else if stage == step {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    };

    LoaderView {
        file_count,
        headline: format!(
            "Analyzing {file_count} resume{} and extracting key information",
            plural(file_count)
        ),
        steps: vec![
            LoaderStepView {
                title: "Files Uploaded",
                detail: format!("Successfully received {file_count} file{}", plural(file_count)),
                status: StepStatus::Complete,
            },
            LoaderStepView {
                title: "Extracting Text",
                detail: "Converting document content to readable text".to_string(),
                status: status_for(Stage::Extracting),
            },
            LoaderStepView {
                title: "AI Analysis",
                detail: "Parsing and structuring resume data".to_string(),
                status: status_for(Stage::Analyzing),
            },
        ],
    }
}

fn build_row(result: &CandidateResult, selected: bool) -> CandidateRowView {
    CandidateRowView {
        id: result.id,
        filename: result.filename.clone(),
        name: result.name.clone(),
        experience: result.experience.clone(),
        score: result.score,
        band: result.band(),
        skills_preview: result
            .skills
            .iter()
            .take(SKILL_PREVIEW_LIMIT)
            .cloned()
            .collect(),
        more_skills: result.skills.len().saturating_sub(SKILL_PREVIEW_LIMIT),
        selected,
    }
}
