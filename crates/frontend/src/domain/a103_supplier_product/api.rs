use contracts::domain::a103_supplier_product::{
    PriceUpdateRequest, PriceUpdateResult, SupplierProduct, SupplierProductId,
    SupplierScanTriggered,
};

use crate::shared::api::{get_json, post_json};

pub async fn fetch_supplier_products() -> Result<Vec<SupplierProduct>, String> {
    get_json("/api/v1/suppliers/products").await
}

/// Recompute shop prices from the selected supplier rows. Partial success
/// is expected; the result carries both counts.
pub async fn trigger_price_update(
    product_ids: Vec<SupplierProductId>,
) -> Result<PriceUpdateResult, String> {
    post_json("/api/v1/suppliers/price-update", &PriceUpdateRequest { product_ids }).await
}

/// Queue a full supplier catalog scan.
pub async fn trigger_scan() -> Result<SupplierScanTriggered, String> {
    post_json("/api/v1/suppliers/scan", &serde_json::json!({})).await
}
