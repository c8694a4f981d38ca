use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use screening_core::{
    mime_type_for_name, update, AppState, Effect, Msg, RoiInputs, Theme, UploadedFile,
};
use screening_logging::{screen_debug, screen_info, screen_warn};

use super::effects::EffectRunner;
use super::settings::AppSettings;
use super::{persistence, ui};
use crate::cli::{ProcessArgs, RoiArgs, ThemeAction, ThemeArgs};

const POLL_INTERVAL: Duration = Duration::from_millis(75);

/// Drives the reducer: dispatches messages, runs effects, renders when dirty.
struct Host {
    state: AppState,
    runner: EffectRunner,
}

impl Host {
    fn new(runner: EffectRunner, theme: Theme) -> Self {
        let (mut state, _) = update(AppState::new(), Msg::ThemeRestored(theme));
        // Nothing to show until files arrive.
        state.consume_dirty();
        Self { state, runner }
    }

    fn dispatch(&mut self, msg: Msg) {
        screen_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            ui::print_lines(&ui::render::render(&state.view()), state.theme());
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Pumps engine events until nothing is in flight or `limit` has passed.
    fn run_until_idle(&mut self, limit: Duration) -> Result<()> {
        let deadline = Instant::now() + limit;
        while self.state.is_processing() || self.state.is_exporting() {
            if Instant::now() >= deadline {
                bail!("gave up waiting after {:?}", limit);
            }
            if let Some(msg) = self.runner.next_msg(POLL_INTERVAL) {
                self.dispatch(msg);
            }
        }
        Ok(())
    }
}

pub fn run_process(settings: &AppSettings, args: ProcessArgs) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(delay_ms) = args.delay_ms {
        settings.processing_delay_ms = delay_ms;
    }

    let runner = EffectRunner::new(settings.engine_config(), settings.state_dir.clone())
        .context("starting engine")?;
    let mut host = Host::new(runner, persistence::load_theme(&settings.state_dir));

    let files = read_files(&args.files);
    host.dispatch(Msg::FilesSelected(files));
    if host.state.files().is_empty() {
        bail!("no PDF, DOC or DOCX files among the given paths");
    }
    screen_info!(
        "Accepted {} of {} files ({} bytes)",
        host.state.files().len(),
        args.files.len(),
        host.state.files().total_bytes()
    );

    // Generous ceiling; the simulated delay is the only wait on this path.
    let limit = Duration::from_millis(settings.processing_delay_ms) + Duration::from_secs(30);
    host.dispatch(Msg::ProcessClicked);
    host.run_until_idle(limit)?;

    if let Some(id) = args.select {
        host.dispatch(Msg::CandidateSelected { id });
        if host.state.selected().is_none() {
            screen_warn!("No candidate with id {}", id);
        }
    }

    if args.export {
        let limit = Duration::from_secs(
            settings.connect_timeout_secs + settings.request_timeout_secs + 5,
        );
        host.dispatch(Msg::ExportClicked);
        host.run_until_idle(limit)?;
    }
    Ok(())
}

pub fn run_roi(settings: &AppSettings, args: RoiArgs) -> Result<()> {
    let theme = persistence::load_theme(&settings.state_dir);
    let inputs = RoiInputs {
        monthly_resumes: args.monthly_resumes,
        minutes_per_resume: args.minutes_per_resume,
        hourly_rate: args.hourly_rate,
    };

    // The calculator is pure state; no engine is needed.
    let (state, _) = update(AppState::new(), Msg::ThemeRestored(theme));
    let (state, _) = update(state, Msg::RoiInputsChanged(inputs));
    let (state, _) = update(state, Msg::RoiToggled);
    if let Some(panel) = state.view().roi {
        ui::print_lines(&ui::render::render_roi(&panel), state.theme());
    }
    Ok(())
}

pub fn run_theme(settings: &AppSettings, args: ThemeArgs) -> Result<()> {
    let current = persistence::load_theme(&settings.state_dir);
    let (state, _) = update(AppState::new(), Msg::ThemeRestored(current));

    let wanted = match args.action {
        ThemeAction::Show => None,
        ThemeAction::Toggle => Some(current.toggled()),
        ThemeAction::Light => Some(Theme::Light),
        ThemeAction::Dark => Some(Theme::Dark),
    };

    let state = match wanted {
        Some(theme) if theme != current => {
            let (state, effects) = update(state, Msg::ThemeToggled);
            for effect in effects {
                if let Effect::PersistTheme { theme } = effect {
                    persistence::save_theme(&settings.state_dir, theme);
                }
            }
            state
        }
        _ => state,
    };

    println!("{}", state.theme());
    Ok(())
}

/// Reads size and derives a MIME type for each path. Unreadable paths and
/// directories are skipped with a warning.
fn read_files(paths: &[PathBuf]) -> Vec<UploadedFile> {
    paths.iter().filter_map(|path| read_file(path)).collect()
}

fn read_file(path: &Path) -> Option<UploadedFile> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            screen_warn!("Skipping {:?}: {}", path, err);
            return None;
        }
    };
    if !meta.is_file() {
        screen_warn!("Skipping {:?}: not a file", path);
        return None;
    }
    let name = path.file_name()?.to_string_lossy().into_owned();
    let mime_type = mime_type_for_name(&name);
    Some(UploadedFile::new(name, meta.len(), mime_type))
}
