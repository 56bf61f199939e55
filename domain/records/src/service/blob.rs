use async_trait::async_trait;

/// Storage server contract, addressed by path under the server's base
/// directory.
///
/// Remote timeouts are the implementation's concern and surface as plain
/// errors here; the record manager decides what each failure means at its
/// call site.
#[async_trait]
pub trait BlobStorageService: Send + Sync {
    /// Whether a blob exists at `path`.
    async fn exists(&self, path: &str) -> anyhow::Result<bool>;

    /// Write `content` to `path`, overwriting whatever is there.
    async fn put(&self, path: &str, content: &[u8]) -> anyhow::Result<()>;

    /// Delete the blob at `path`.
    async fn delete(&self, path: &str) -> anyhow::Result<()>;

    /// Size in bytes of the blob at `path`.
    async fn size(&self, path: &str) -> anyhow::Result<u64>;

    /// Paths of every blob directly under `root`; the root is a flat
    /// namespace, one blob per filename.
    async fn list_all(&self, root: &str) -> anyhow::Result<Vec<String>>;
}
