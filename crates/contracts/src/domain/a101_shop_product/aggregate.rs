use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a product in the shop's own catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopProductId(pub Uuid);

impl ShopProductId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ShopProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A product in the shop's catalog as the list endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProduct {
    pub id: ShopProductId,
    pub sku: String,
    pub title: String,
    pub vendor: Option<String>,
    /// Current selling price in the shop currency.
    pub price: f64,
    /// Strike-through price, if a sale is active.
    pub compare_at_price: Option<f64>,
    pub currency: String,
    pub inventory_quantity: i64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopVariant {
    pub sku: String,
    pub title: String,
    pub price: f64,
    pub inventory_quantity: i64,
}

/// Detail payload for the product modal; the list row plus variant data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProductDetail {
    #[serde(flatten)]
    pub product: ShopProduct,
    pub description: Option<String>,
    #[serde(default)]
    pub variants: Vec<ShopVariant>,
    /// How many mappings currently point at this product.
    #[serde(default)]
    pub mapping_count: u32,
}

/// Slim id/label pair for pickers; fetched once per page life and cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub id: ShopProductId,
    pub sku: String,
    pub title: String,
    pub price: f64,
}

impl ProductOption {
    /// Label shown in select lists and cross-referenced mapping rows.
    pub fn label(&self) -> String {
        format!("{} - {}", self.sku, self.title)
    }
}
