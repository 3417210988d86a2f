use contracts::domain::a102_competitor_product::{
    CompetitorProduct, CompetitorProductId, ScanRequest, ScanTriggered,
};
use contracts::domain::a106_scan_log::ScanLog;

use crate::shared::api::{get_json, post_json};

pub async fn fetch_competitor_products() -> Result<Vec<CompetitorProduct>, String> {
    get_json("/api/v1/competitors/products").await
}

/// Queue a scrape of the selected listings.
pub async fn trigger_scan(product_ids: Vec<CompetitorProductId>) -> Result<ScanTriggered, String> {
    post_json("/api/v1/competitors/scan", &ScanRequest { product_ids }).await
}

/// Scan history of one listing; `source` is a free-form catalog name and
/// must be encoded.
pub async fn fetch_scan_logs(
    product_id: CompetitorProductId,
    source: &str,
) -> Result<Vec<ScanLog>, String> {
    let path = format!(
        "/api/v1/scan-logs?productId={}&source={}",
        product_id,
        urlencoding::encode(source)
    );
    get_json(&path).await
}
