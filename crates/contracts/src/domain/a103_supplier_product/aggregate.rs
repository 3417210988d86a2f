use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a101_shop_product::ShopProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierProductId(pub Uuid);

impl SupplierProductId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SupplierProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One row of the latest supplier scan: what we could buy, at what price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProduct {
    pub id: SupplierProductId,
    pub supplier: String,
    pub sku: String,
    pub title: String,
    /// Purchase price offered by the supplier.
    pub purchase_price: f64,
    pub currency: String,
    pub stock: i64,
    pub shop_product_ref: Option<ShopProductId>,
    /// Our current selling price for the mapped product.
    pub shop_price: Option<f64>,
    pub scanned_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SupplierProduct {
    /// Gross margin percentage of selling price over purchase price.
    pub fn margin_percent(&self) -> Option<f64> {
        let selling = self.shop_price?;
        if selling == 0.0 {
            return None;
        }
        Some((selling - self.purchase_price) / selling * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(purchase_price: f64, shop_price: Option<f64>) -> SupplierProduct {
        SupplierProduct {
            id: SupplierProductId(Uuid::nil()),
            supplier: "acme".to_string(),
            sku: "SKU-1".to_string(),
            title: "Test".to_string(),
            purchase_price,
            currency: "JPY".to_string(),
            stock: 3,
            shop_product_ref: None,
            shop_price,
            scanned_at: None,
        }
    }

    #[test]
    fn margin_is_share_of_selling_price() {
        assert_eq!(row(60.0, Some(100.0)).margin_percent(), Some(40.0));
        // selling below cost gives a negative margin
        assert_eq!(row(120.0, Some(100.0)).margin_percent(), Some(-20.0));
    }

    #[test]
    fn margin_undefined_without_a_selling_price() {
        assert_eq!(row(60.0, None).margin_percent(), None);
        assert_eq!(row(60.0, Some(0.0)).margin_percent(), None);
    }
}
