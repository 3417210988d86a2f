use contracts::domain::a105_price_plan::{ApplyPlanResult, PricePlan, PricePlanId};

use crate::shared::api::{get_json, post_json};

pub async fn fetch_price_plans() -> Result<Vec<PricePlan>, String> {
    get_json("/api/v1/price-plans").await
}

/// Apply a plan line by line; the result carries applied/failed counts.
pub async fn apply_plan(id: PricePlanId) -> Result<ApplyPlanResult, String> {
    post_json(&format!("/api/v1/price-plans/{id}/apply"), &serde_json::json!({})).await
}

/// Ask the backend to compute a fresh plan from current scan data.
pub async fn generate_plan() -> Result<PricePlan, String> {
    post_json("/api/v1/price-plans/generate", &serde_json::json!({})).await
}
