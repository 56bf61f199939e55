use std::sync::Arc;

use domain_records::service::FileRecordService;
use service_records::FileRecordServiceImpl;

use crate::{
    config::FmsConfig,
    database::Database,
    infrastructure::{repository::OrmRepo, service::SftpServerBrokerService},
};

/// Wire configuration into a ready record manager.
///
/// The boundary layer hosting this crate decides how the service is
/// exposed; nothing here binds a port or speaks HTTP.
pub async fn build_record_service(config: &FmsConfig) -> anyhow::Result<Arc<dyn FileRecordService>> {
    let database = Database::new(&config.db).await?;
    let record_repo = Arc::new(OrmRepo::new(database));
    let blob_service = Arc::new(SftpServerBrokerService::new(&config.storage)?);
    Ok(Arc::new(
        FileRecordServiceImpl::builder()
            .record_repo(record_repo)
            .blob_service(blob_service)
            .storage_root(config.storage.storage_root.clone())
            .build(),
    ))
}
