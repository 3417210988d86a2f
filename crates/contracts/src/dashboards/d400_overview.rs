use serde::{Deserialize, Serialize};

/// Headline numbers for the landing tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub product_count: u64,
    pub mapping_count: u64,
    pub competitor_count: u64,
    pub supplier_count: u64,
    /// Price plans waiting to be applied.
    pub plans_pending: u64,
    pub last_scan_at: Option<chrono::DateTime<chrono::Utc>>,
}
