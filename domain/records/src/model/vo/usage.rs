use serde::{Deserialize, Serialize};

/// Aggregate usage of the storage root, as reported by walking it.
///
/// The walk costs one remote call per blob and nothing pins the store while
/// it runs, so these numbers are a non-atomic snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub total_files: u64,
    /// Sum of blob sizes in GB, rounded to two decimals.
    pub total_size_gb: f64,
    pub root_path: String,
}
