//! Logger setup for the terminal host.

use std::path::Path;

use log::LevelFilter;
use screening_logging::LogDestination;

/// Terminal logging always; a log file as well when one is configured.
pub fn initialize(log_file: Option<&Path>, verbosity: u8) {
    let destination = match log_file {
        Some(path) => LogDestination::Both(path.to_path_buf()),
        None => LogDestination::Terminal,
    };
    screening_logging::initialize(&destination, level_for(verbosity));
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
