use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_records::{
    command::{CreateRecordCommand, UpdateRecordCommand},
    exception::{FileRecordException, FileRecordResult},
    model::{
        entity::FileRecord,
        vo::{FileUpload, NewFileRecord, StorageUsage},
    },
    repository::FileRecordRepo,
    service::{BlobStorageService, FileRecordService},
};
use typed_builder::TypedBuilder;

use crate::validate::{check_date, check_text, check_upload};

/// Coordinates the storage server and the metadata store.
///
/// Mutations probe both stores before writing and write the blob before the
/// record, so a failure part-way through leaves at worst an orphan blob,
/// never a record pointing at nothing. There is no transaction spanning the
/// two stores and no rollback: the one partial state (`OrphanAfterWrite`)
/// is reported, not hidden.
#[derive(TypedBuilder)]
pub struct FileRecordServiceImpl {
    record_repo: Arc<dyn FileRecordRepo>,
    blob_service: Arc<dyn BlobStorageService>,
    storage_root: String,
}

fn blob_path(root: &str, filename: &str) -> String {
    format!("{root}/{filename}")
}

fn gigabytes(bytes: u64) -> f64 {
    let gb = bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    (gb * 100.0).round() / 100.0
}

/// Run every field validator, collecting all violations before failing.
fn validated(
    file: Option<&FileUpload>,
    uploader: &str,
    category: &str,
    date: &str,
) -> FileRecordResult<NaiveDate> {
    let mut violations = vec![];
    if let Some(file) = file {
        check_upload(file, &mut violations);
    }
    check_text("uploader", uploader, &mut violations);
    check_text("category", category, &mut violations);
    let date = check_date(date, &mut violations);
    match (violations.is_empty(), date) {
        (true, Some(date)) => Ok(date),
        _ => Err(FileRecordException::Invalid { violations }),
    }
}

impl FileRecordServiceImpl {
    /// Cleanup deletes never fail the surrounding operation; a blob left
    /// behind is logged so reconciliation tooling can find it.
    async fn remove_blob_best_effort(&self, path: &str) {
        match self.blob_service.exists(path).await {
            Ok(true) => {
                if let Err(e) = self.blob_service.delete(path).await {
                    tracing::warn!("Failed to delete blob {path}, leaving it behind: {e}");
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Could not check blob {path} before deleting, leaving it: {e}");
            }
        }
    }
}

#[async_trait]
impl FileRecordService for FileRecordServiceImpl {
    async fn list(&self) -> FileRecordResult<Vec<FileRecord>> {
        self.record_repo
            .get_all()
            .await
            .map_err(|source| FileRecordException::MetadataUnavailable { source })
    }

    async fn get(&self, id: i64) -> FileRecordResult<FileRecord> {
        self.record_repo
            .get_by_id(id)
            .await
            .map_err(|source| FileRecordException::MetadataUnavailable { source })?
            .ok_or(FileRecordException::NotFound { id })
    }

    async fn create(&self, command: CreateRecordCommand) -> FileRecordResult<FileRecord> {
        let CreateRecordCommand {
            file,
            uploader,
            category,
            date,
        } = command;
        let date = validated(Some(&file), &uploader, &category, &date)?;

        let path = blob_path(&self.storage_root, &file.filename);
        if self
            .blob_service
            .exists(&path)
            .await
            .map_err(|source| FileRecordException::BlobUnavailable { source })?
        {
            return Err(FileRecordException::DuplicateBlob { path });
        }

        if self
            .record_repo
            .get_by_details(&file.filename, &uploader, &category, date)
            .await
            .map_err(|source| FileRecordException::MetadataUnavailable { source })?
            .is_some()
        {
            return Err(FileRecordException::DuplicateRecord {
                filename: file.filename,
                uploader,
                category,
                date,
            });
        }

        self.blob_service
            .put(&path, &file.content)
            .await
            .map_err(|source| FileRecordException::BlobWrite {
                path: path.clone(),
                source,
            })?;

        // The blob is on the server now. A record failure past this point
        // leaves an orphan blob; report it with the path instead of trying
        // to undo the upload (the undo can fail too, and silently).
        let new = NewFileRecord {
            filename: file.filename,
            uploader,
            category,
            date,
        };
        self.record_repo
            .insert(&new)
            .await
            .map_err(|source| FileRecordException::OrphanAfterWrite { path, source })
    }

    async fn update(&self, command: UpdateRecordCommand) -> FileRecordResult<FileRecord> {
        let UpdateRecordCommand {
            id,
            file,
            uploader,
            category,
            date,
        } = command;
        let mut record = self.get(id).await?;
        let date = validated(file.as_ref(), &uploader, &category, &date)?;

        if let Some(file) = file {
            let new_path = blob_path(&self.storage_root, &file.filename);
            if self
                .blob_service
                .exists(&new_path)
                .await
                .map_err(|source| FileRecordException::BlobUnavailable { source })?
            {
                return Err(FileRecordException::DuplicateBlob { path: new_path });
            }

            self.blob_service
                .put(&new_path, &file.content)
                .await
                .map_err(|source| FileRecordException::BlobWrite {
                    path: new_path.clone(),
                    source,
                })?;

            // Same-name replacement means the path now holds the new blob;
            // only a genuinely old path is cleanup.
            let old_path = blob_path(&self.storage_root, &record.filename);
            if old_path != new_path {
                self.remove_blob_best_effort(&old_path).await;
            }
            record.filename = file.filename;
        }

        record.uploader = uploader;
        record.category = category;
        record.date = date;
        self.record_repo
            .update(&record)
            .await
            .map_err(|source| FileRecordException::MetadataUnavailable { source })
    }

    async fn delete(&self, id: i64) -> FileRecordResult<()> {
        let record = self.get(id).await?;
        // The user's intent is removal: storage server trouble never
        // blocks dropping the record.
        let path = blob_path(&self.storage_root, &record.filename);
        self.remove_blob_best_effort(&path).await;
        self.record_repo
            .delete_by_id(id)
            .await
            .map_err(|source| FileRecordException::MetadataUnavailable { source })?;
        Ok(())
    }

    async fn storage_usage(&self) -> FileRecordResult<StorageUsage> {
        let paths = self
            .blob_service
            .list_all(&self.storage_root)
            .await
            .map_err(|source| FileRecordException::BlobUnavailable { source })?;

        // One size query per blob: as slow as the store and nothing pins
        // it mid-walk, so the totals are a snapshot.
        let mut total_bytes = 0u64;
        for path in &paths {
            total_bytes += self
                .blob_service
                .size(path)
                .await
                .map_err(|source| FileRecordException::BlobUnavailable { source })?;
        }

        Ok(StorageUsage {
            total_files: paths.len() as u64,
            total_size_gb: gigabytes(total_bytes),
            root_path: self.storage_root.clone(),
        })
    }
}
