use contracts::dashboards::d401_analytics::{AnalyticsPeriod, AnalyticsSummary, PricePoint};

use crate::shared::api::get_json;

pub async fn fetch_summary(period: AnalyticsPeriod) -> Result<AnalyticsSummary, String> {
    get_json(&format!(
        "/api/v1/analytics/summary?period={}",
        period.query_value()
    ))
    .await
}

pub async fn fetch_price_history(period: AnalyticsPeriod) -> Result<Vec<PricePoint>, String> {
    get_json(&format!(
        "/api/v1/analytics/price-history?period={}",
        period.query_value()
    ))
    .await
}
