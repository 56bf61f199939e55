mod blob;
mod record;

#[rustfmt::skip]
pub use {
    blob::BlobStorageService,
    record::FileRecordService,
};
