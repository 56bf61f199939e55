use std::time::Duration;

use async_trait::async_trait;
use domain_records::service::BlobStorageService;
use futures::TryStreamExt;
use opendal::{services::Sftp, Operator};
use tokio::time::timeout;

use crate::config::SftpServerOption;

/// Blob store over the SFTP storage server, addressed by path under the
/// server's base directory.
///
/// Every remote call runs under the configured per-call timeout; an
/// elapsed timeout is an error like any other remote failure.
pub struct SftpServerBrokerService {
    operator: Operator,
    request_timeout: Duration,
}

impl SftpServerBrokerService {
    pub fn new(option: &SftpServerOption) -> anyhow::Result<Self> {
        Ok(Self {
            operator: create_sftp_operator(option)?,
            request_timeout: Duration::from_secs(option.request_timeout_secs),
        })
    }
}

#[async_trait]
impl BlobStorageService for SftpServerBrokerService {
    async fn exists(&self, path: &str) -> anyhow::Result<bool> {
        Ok(timeout(self.request_timeout, self.operator.is_exist(path)).await??)
    }

    async fn put(&self, path: &str, content: &[u8]) -> anyhow::Result<()> {
        timeout(self.request_timeout, self.operator.write(path, content.to_vec())).await??;
        Ok(())
    }

    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        timeout(self.request_timeout, self.operator.delete(path)).await??;
        Ok(())
    }

    async fn size(&self, path: &str) -> anyhow::Result<u64> {
        let meta = timeout(self.request_timeout, self.operator.stat(path)).await??;
        Ok(meta.content_length())
    }

    async fn list_all(&self, root: &str) -> anyhow::Result<Vec<String>> {
        let dir = format!("{}/", root.trim_end_matches('/'));
        let mut lister = timeout(self.request_timeout, self.operator.lister(&dir)).await??;
        let mut paths = vec![];
        while let Some(entry) = timeout(self.request_timeout, lister.try_next()).await?? {
            let path = entry.path().to_string();
            // directories come back with a trailing slash
            if !path.ends_with('/') {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

fn create_sftp_operator(option: &SftpServerOption) -> anyhow::Result<Operator> {
    let mut builder = Sftp::default();
    builder.endpoint(&option.endpoint).user(&option.user).root(&option.base_dir);
    if !option.key_path.is_empty() {
        builder.key(&option.key_path);
    }
    Ok(Operator::new(builder)?.finish())
}
