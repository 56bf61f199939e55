use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicI64, Ordering},
        Mutex,
    },
};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDate;
use domain_records::{
    model::{entity::FileRecord, vo::NewFileRecord},
    repository::FileRecordRepo,
    service::BlobStorageService,
};

/// Path-keyed blob store. Every method yields once so concurrent callers
/// interleave the way they would against a real remote.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn contains(&self, path: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(path)
    }

    pub fn remove(&self, path: &str) {
        self.blobs.lock().unwrap().remove(path);
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl BlobStorageService for InMemoryBlobStore {
    async fn exists(&self, path: &str) -> anyhow::Result<bool> {
        tokio::task::yield_now().await;
        Ok(self.blobs.lock().unwrap().contains_key(path))
    }

    async fn put(&self, path: &str, content: &[u8]) -> anyhow::Result<()> {
        tokio::task::yield_now().await;
        self.blobs.lock().unwrap().insert(path.to_string(), content.to_vec());
        Ok(())
    }

    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        tokio::task::yield_now().await;
        self.blobs.lock().unwrap().remove(path);
        Ok(())
    }

    async fn size(&self, path: &str) -> anyhow::Result<u64> {
        tokio::task::yield_now().await;
        let blobs = self.blobs.lock().unwrap();
        let content = blobs.get(path).ok_or_else(|| anyhow!("no blob at {path}"))?;
        Ok(content.len() as u64)
    }

    async fn list_all(&self, root: &str) -> anyhow::Result<Vec<String>> {
        tokio::task::yield_now().await;
        let prefix = format!("{root}/");
        let mut paths: Vec<String> = self
            .blobs
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.starts_with(&prefix))
            .cloned()
            .collect();
        paths.sort();
        Ok(paths)
    }
}

/// Id-keyed record rows with store-assigned auto-increment ids.
pub struct InMemoryRecordStore {
    rows: Mutex<BTreeMap<i64, FileRecord>>,
    next_id: AtomicI64,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryRecordStore {
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows(&self) -> Vec<FileRecord> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl FileRecordRepo for InMemoryRecordStore {
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<FileRecord>> {
        tokio::task::yield_now().await;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<FileRecord>> {
        tokio::task::yield_now().await;
        Ok(self.rows())
    }

    async fn get_by_details(
        &self,
        filename: &str,
        uploader: &str,
        category: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Option<FileRecord>> {
        tokio::task::yield_now().await;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|r| {
                r.filename == filename
                    && r.uploader == uploader
                    && r.category == category
                    && r.date == date
            })
            .cloned())
    }

    async fn insert(&self, new: &NewFileRecord) -> anyhow::Result<FileRecord> {
        tokio::task::yield_now().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = FileRecord {
            id,
            filename: new.filename.clone(),
            uploader: new.uploader.clone(),
            category: new.category.clone(),
            date: new.date,
        };
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &FileRecord) -> anyhow::Result<FileRecord> {
        tokio::task::yield_now().await;
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&record.id) {
            return Err(anyhow!("no row with id {}", record.id));
        }
        rows.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        tokio::task::yield_now().await;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
