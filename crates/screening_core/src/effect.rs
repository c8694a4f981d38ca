use crate::{BatchId, Theme, UploadedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ProcessBatch {
        batch_id: BatchId,
        files: Vec<UploadedFile>,
    },
    DownloadExport,
    PersistTheme { theme: Theme },
}
