use chrono::NaiveDate;
use serde::Serialize;

pub type FileRecordResult<T> = Result<T, FileRecordException>;

/// One failed field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FileRecordException {
    /// Bad input; neither store was touched.
    #[error("Validation failed: {}.", summarize(.violations))]
    Invalid { violations: Vec<FieldViolation> },

    #[error("No file record with id: {id}.")]
    NotFound { id: i64 },

    /// A blob already sits at the canonical path; nothing was written.
    #[error("A file already exists at {path} on the storage server.")]
    DuplicateBlob { path: String },

    /// The exact details tuple is already recorded; nothing was written.
    #[error("File details already recorded: {filename} by {uploader} in {category} on {date}.")]
    DuplicateRecord {
        filename: String,
        uploader: String,
        category: String,
        date: NaiveDate,
    },

    /// The remote write failed; no metadata was created.
    #[error("Failed to upload {path} to the storage server: {source}")]
    BlobWrite {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// The storage server could not be reached or timed out.
    #[error("The storage server did not answer: {source}")]
    BlobUnavailable {
        #[source]
        source: anyhow::Error,
    },

    /// The blob at `path` was written but recording its metadata failed.
    /// The store now holds an orphan blob; reconciliation needs the path.
    #[error("Uploaded {path} but failed to record its metadata: {source}")]
    OrphanAfterWrite {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// The metadata store could not be reached or timed out.
    #[error("The metadata store did not answer: {source}")]
    MetadataUnavailable {
        #[source]
        source: anyhow::Error,
    },

    #[error("File record internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for FileRecordException {
    fn from(e: anyhow::Error) -> Self {
        FileRecordException::InternalError { source: e }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
