use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a101_shop_product::ShopProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitorProductId(pub Uuid);

impl CompetitorProductId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CompetitorProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A competitor listing as the scraper last saw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProduct {
    pub id: CompetitorProductId,
    /// Which competitor catalog this row came from, e.g. "snkrdunk".
    pub source: String,
    /// Listing id inside the competitor catalog.
    pub external_id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub in_stock: bool,
    /// Shop product this listing is mapped to, when a mapping exists.
    pub shop_product_ref: Option<ShopProductId>,
    /// Our own price for the mapped product, denormalized by the backend.
    pub shop_price: Option<f64>,
    pub last_seen_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CompetitorProduct {
    /// Percentage gap of the competitor price relative to our price.
    /// Positive means the competitor is more expensive.
    pub fn price_gap_percent(&self) -> Option<f64> {
        let ours = self.shop_price?;
        if ours == 0.0 {
            return None;
        }
        Some((self.price - ours) / ours * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn listing(price: f64, shop_price: Option<f64>) -> CompetitorProduct {
        CompetitorProduct {
            id: CompetitorProductId(Uuid::nil()),
            source: "snkrdunk".to_string(),
            external_id: "SNK-1".to_string(),
            title: "Test listing".to_string(),
            price,
            currency: "JPY".to_string(),
            in_stock: true,
            shop_product_ref: None,
            shop_price,
            last_seen_at: None,
        }
    }

    #[test]
    fn gap_is_relative_to_our_price() {
        assert_eq!(listing(120.0, Some(100.0)).price_gap_percent(), Some(20.0));
        assert_eq!(listing(80.0, Some(100.0)).price_gap_percent(), Some(-20.0));
    }

    #[test]
    fn gap_undefined_without_a_mapped_price() {
        assert_eq!(listing(120.0, None).price_gap_percent(), None);
        assert_eq!(listing(120.0, Some(0.0)).price_gap_percent(), None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(listing(120.0, Some(100.0))).unwrap();
        assert!(json.get("externalId").is_some());
        assert!(json.get("inStock").is_some());
        assert!(json.get("shopPrice").is_some());
        assert!(json.get("external_id").is_none());
    }
}
