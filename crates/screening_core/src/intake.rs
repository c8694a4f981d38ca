use crate::file::{is_allowed_file, UploadedFile};

/// Ordered set of files accepted for the next batch.
///
/// Insertion order is selection order. Duplicate names are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptedFileSet {
    files: Vec<UploadedFile>,
}

impl AcceptedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every allowed candidate; disallowed files are dropped silently.
    pub fn accept(mut self, candidates: impl IntoIterator<Item = UploadedFile>) -> Self {
        self.files
            .extend(candidates.into_iter().filter(is_allowed_file));
        self
    }

    /// Drops the file at `index`. An out-of-range index leaves the set as is.
    pub fn remove(mut self, index: usize) -> Self {
        if index < self.files.len() {
            self.files.remove(index);
        }
        self
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UploadedFile> {
        self.files.iter()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.size).sum()
    }
}

impl<'a> IntoIterator for &'a AcceptedFileSet {
    type Item = &'a UploadedFile;
    type IntoIter = std::slice::Iter<'a, UploadedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
