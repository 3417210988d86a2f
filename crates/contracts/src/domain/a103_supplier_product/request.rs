use serde::{Deserialize, Serialize};

use super::aggregate::SupplierProductId;

/// Ask the backend to recompute shop prices from the selected supplier rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateRequest {
    pub product_ids: Vec<SupplierProductId>,
}

/// Ad-hoc partial-success report: the backend applies what it can and
/// returns counts plus per-item error texts for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateResult {
    pub updated_count: u32,
    pub failed_count: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierScanTriggered {
    pub queued_count: u32,
}
