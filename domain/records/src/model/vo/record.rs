use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Details of a file record before the metadata store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFileRecord {
    pub filename: String,
    pub uploader: String,
    pub category: String,
    pub date: NaiveDate,
}
