use async_trait::async_trait;

use crate::{
    command::{CreateRecordCommand, UpdateRecordCommand},
    exception::FileRecordResult,
    model::{entity::FileRecord, vo::StorageUsage},
};

/// The record manager: keeps the storage server and the metadata store
/// agreeing about which files exist, with best-effort sequencing only.
#[async_trait]
pub trait FileRecordService: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> FileRecordResult<Vec<FileRecord>>;

    /// One record by id.
    async fn get(&self, id: i64) -> FileRecordResult<FileRecord>;

    /// Upload a new file and record it. The blob is written first; a
    /// record is only ever created for a blob that was stored.
    async fn create(&self, command: CreateRecordCommand) -> FileRecordResult<FileRecord>;

    /// Rewrite a record's details, replacing its blob when a new file is
    /// supplied.
    async fn update(&self, command: UpdateRecordCommand) -> FileRecordResult<FileRecord>;

    /// Remove the blob (best effort), then the record (unconditionally).
    async fn delete(&self, id: i64) -> FileRecordResult<()>;

    /// Walk the storage root and total up what is there.
    async fn storage_usage(&self) -> FileRecordResult<StorageUsage>;
}
