use serde::{Deserialize, Serialize};

/// MIME types accepted by intake.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Filename suffixes accepted by intake, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A file the user picked or dropped. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn size_label(&self) -> String {
        format_file_size(self.size)
    }
}

/// A file passes when either its MIME type or its extension is allowed.
pub fn is_allowed_file(file: &UploadedFile) -> bool {
    if ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return true;
    }
    let lowered = file.name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Best-effort MIME type for a local file name, keyed on its extension.
pub fn mime_type_for_name(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .zip(ALLOWED_MIME_TYPES.iter())
        .find(|(ext, _)| lowered.ends_with(*ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`.
///
/// Units stop at MB; anything larger is still expressed in MB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_or_extension_is_enough() {
        assert!(is_allowed_file(&UploadedFile::new("resume", 1, "application/pdf")));
        assert!(is_allowed_file(&UploadedFile::new("CV.DOCX", 1, "")));
        assert!(is_allowed_file(&UploadedFile::new("cv.doc", 1, "text/plain")));
        assert!(!is_allowed_file(&UploadedFile::new("cover.txt", 1, "text/plain")));
        assert!(!is_allowed_file(&UploadedFile::new("pdf", 1, "image/png")));
    }

    #[test]
    fn mime_lookup_follows_extension() {
        assert_eq!(mime_type_for_name("a.PDF"), "application/pdf");
        assert_eq!(mime_type_for_name("a.doc"), "application/msword");
        assert_eq!(
            mime_type_for_name("a.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(mime_type_for_name("a.txt"), "application/octet-stream");
    }

    #[test]
    fn sizes_trim_trailing_zeros() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5120 MB");
    }
}
