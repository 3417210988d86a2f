use serde::{Deserialize, Serialize};

use super::aggregate::CompetitorProductId;

/// Ask the backend to queue a scrape for the given listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub product_ids: Vec<CompetitorProductId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTriggered {
    pub queued_count: u32,
}
