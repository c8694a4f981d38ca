//! Terminal host: settings, logging, persistence and the reducer loop.

mod app;
mod effects;
mod logging;
mod persistence;
mod settings;
pub mod ui;

use anyhow::Result;
use screening_logging::screen_info;

use crate::cli::{Cli, Commands};
use settings::AppSettings;

pub fn run(cli: Cli) -> Result<()> {
    let (mut settings, source) = AppSettings::load(cli.config.as_deref())?;
    settings.apply_cli(&cli);
    logging::initialize(settings.log_file.as_deref(), cli.verbose);
    match source {
        Some(path) => screen_info!("Loaded settings from {:?}", path),
        None => screen_info!("No settings file, using defaults"),
    }

    match cli.command {
        Commands::Process(args) => app::run_process(&settings, args),
        Commands::Roi(args) => app::run_roi(&settings, args),
        Commands::Theme(args) => app::run_theme(&settings, args),
    }
}
