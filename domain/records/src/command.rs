use crate::model::vo::FileUpload;

/// Upload a new file and record its details.
pub struct CreateRecordCommand {
    pub file: FileUpload,
    pub uploader: String,
    pub category: String,
    /// Calendar date as `%Y-%m-%d`; parsed during validation.
    pub date: String,
}

/// Rewrite a record's details, optionally replacing its blob.
pub struct UpdateRecordCommand {
    pub id: i64,
    /// When present, the blob is replaced and the record takes the new
    /// file's name.
    pub file: Option<FileUpload>,
    pub uploader: String,
    pub category: String,
    pub date: String,
}
