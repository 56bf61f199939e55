use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::{
    model::{entity::FileRecord, vo::NewFileRecord},
    repository::FileRecordRepo,
    service::BlobStorageService,
};

mock! {
    pub FileRecordRepo {}
    #[async_trait]
    impl FileRecordRepo for FileRecordRepo {
        async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FileRecord>>;
        async fn get_all(&self) -> anyhow::Result<Vec<FileRecord>>;
        async fn get_by_details(
            &self,
            filename: &str,
            uploader: &str,
            category: &str,
            date: NaiveDate,
        ) -> anyhow::Result<Option<FileRecord>>;
        async fn insert(&self, new: &NewFileRecord) -> anyhow::Result<FileRecord>;
        async fn update(&self, record: &FileRecord) -> anyhow::Result<FileRecord>;
        async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
    }
}

mock! {
    pub BlobStorageService {}
    #[async_trait]
    impl BlobStorageService for BlobStorageService {
        async fn exists(&self, path: &str) -> anyhow::Result<bool>;
        async fn put(&self, path: &str, content: &[u8]) -> anyhow::Result<()>;
        async fn delete(&self, path: &str) -> anyhow::Result<()>;
        async fn size(&self, path: &str) -> anyhow::Result<u64>;
        async fn list_all(&self, root: &str) -> anyhow::Result<Vec<String>>;
    }
}
