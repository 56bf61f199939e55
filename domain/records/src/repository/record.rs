use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::{entity::FileRecord, vo::NewFileRecord};

/// Metadata store contract: one row per tracked file, keyed by a
/// store-assigned id, plus the exact-tuple duplicate probe.
#[async_trait]
pub trait FileRecordRepo: Send + Sync {
    /// Get one record by id.
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FileRecord>>;

    /// All records, ordered by id.
    async fn get_all(&self) -> anyhow::Result<Vec<FileRecord>>;

    /// Find the record matching the full details tuple exactly.
    async fn get_by_details(
        &self,
        filename: &str,
        uploader: &str,
        category: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Option<FileRecord>>;

    /// Insert and return the stored record with its assigned id.
    async fn insert(&self, new: &NewFileRecord) -> anyhow::Result<FileRecord>;

    /// Rewrite the row with the record's id and return the stored state.
    async fn update(&self, record: &FileRecord) -> anyhow::Result<FileRecord>;

    /// Delete the record by id.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
}
