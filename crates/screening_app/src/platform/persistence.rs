use std::fs;
use std::path::{Path, PathBuf};

use screening_core::Theme;
use screening_engine::AtomicFileWriter;
use screening_logging::{screen_error, screen_info, screen_warn};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".screening_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    theme: String,
}

/// Reads the stored theme; anything missing or unreadable means light.
pub(crate) fn load_theme(state_dir: &Path) -> Theme {
    let path = state_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Theme::default();
        }
        Err(err) => {
            screen_warn!("Failed to read preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            screen_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return Theme::default();
        }
    };

    match prefs.theme.parse() {
        Ok(theme) => theme,
        Err(err) => {
            screen_warn!("Ignoring stored theme: {}", err);
            Theme::default()
        }
    }
}

pub(crate) fn save_theme(state_dir: &Path, theme: Theme) {
    let prefs = PersistedPrefs {
        theme: theme.as_str().to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            screen_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    match writer.write_str(PREFS_FILENAME, &content) {
        Ok(path) => screen_info!("Saved theme '{}' to {:?}", theme, path),
        Err(err) => screen_error!(
            "Failed to write preferences to {:?}: {}",
            state_dir,
            err
        ),
    }
}
