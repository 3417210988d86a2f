use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a101_shop_product::ShopProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricePlanId(pub Uuid);

impl PricePlanId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PricePlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricePlanStatus {
    Draft,
    Applied,
    PartiallyApplied,
    Failed,
}

impl PricePlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PricePlanStatus::Draft => "Draft",
            PricePlanStatus::Applied => "Applied",
            PricePlanStatus::PartiallyApplied => "Partially applied",
            PricePlanStatus::Failed => "Failed",
        }
    }
}

/// One proposed price change inside a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePlanLine {
    pub shop_product_ref: ShopProductId,
    pub sku: String,
    pub title: String,
    pub current_price: f64,
    pub proposed_price: f64,
}

impl PricePlanLine {
    pub fn delta(&self) -> f64 {
        self.proposed_price - self.current_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn delta_is_signed() {
        let line = PricePlanLine {
            shop_product_ref: crate::domain::a101_shop_product::ShopProductId(Uuid::nil()),
            sku: "SKU-1".to_string(),
            title: "Test".to_string(),
            current_price: 100.0,
            proposed_price: 90.0,
        };
        assert_eq!(line.delta(), -10.0);
    }

    #[test]
    fn plans_tolerate_missing_lines_field() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Weekly reprice",
            "status": "draft",
            "currency": "JPY",
            "createdAt": "2024-03-15T14:02:26Z"
        }"#;
        let plan: PricePlan = serde_json::from_str(json).unwrap();
        assert!(plan.lines.is_empty());
        assert_eq!(plan.status, PricePlanStatus::Draft);
    }
}

/// A backend-generated batch of proposed price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePlan {
    pub id: PricePlanId,
    pub name: String,
    pub status: PricePlanStatus,
    pub currency: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub lines: Vec<PricePlanLine>,
}
