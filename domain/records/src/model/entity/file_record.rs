use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tracked file: the metadata row for a blob held on the storage server
/// at `<root>/<filename>`.
///
/// A record existing implies the blob existed when the record was written.
/// The implication is not re-checked afterwards: an out-of-band blob
/// deletion leaves a stale record, and a crash between the blob write and
/// the record write leaves an orphan blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Id, assigned by the metadata store on insert.
    pub id: i64,
    /// Client-supplied name, also the blob's path component under the root.
    pub filename: String,
    /// Attribution of the upload.
    pub uploader: String,
    /// Free-text classification.
    pub category: String,
    /// Calendar date associated with the upload.
    pub date: NaiveDate,
}
