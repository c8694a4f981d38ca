use std::path::Path;

const FALLBACK_NAME: &str = "download";
const MAX_STEM_LEN: usize = 80;

/// Replaces path separators and other characters that are unsafe in file
/// names on common platforms. Never returns an empty string.
pub fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let mut cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    if cleaned.len() > MAX_STEM_LEN {
        let mut cut = MAX_STEM_LEN;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
    }
    if is_reserved_windows_name(&cleaned) {
        // `con.xlsx` -> `con_.xlsx`
        let at = cleaned.find('.').unwrap_or(cleaned.len());
        cleaned.insert(at, '_');
    }
    cleaned
}

/// First name in `dir` that does not exist yet, browser style:
/// `report.xlsx`, `report (1).xlsx`, `report (2).xlsx`, ...
pub fn available_filename(dir: &Path, wanted: &str) -> String {
    let wanted = sanitize_filename(wanted);
    if !dir.join(&wanted).exists() {
        return wanted;
    }

    let (stem, ext) = match wanted.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), format!(".{ext}")),
        _ => (wanted.clone(), String::new()),
    };
    (1u32..)
        .map(|n| format!("{stem} ({n}){ext}"))
        .find(|candidate| !dir.join(candidate).exists())
        .unwrap_or(wanted)
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(stem))
}
