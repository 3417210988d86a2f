use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a101_shop_product::ShopProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductMappingId(pub Uuid);

impl ProductMappingId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProductMappingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Which external catalog the mapped item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingKind {
    Supplier,
    Competitor,
}

impl MappingKind {
    pub fn label(&self) -> &'static str {
        match self {
            MappingKind::Supplier => "Supplier",
            MappingKind::Competitor => "Competitor",
        }
    }
}

/// Association between an external catalog item and a shop product.
/// Owned by the backend; the dashboard only displays and edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMapping {
    pub id: ProductMappingId,
    pub kind: MappingKind,
    /// Source catalog name, e.g. "snkrdunk" or a supplier code.
    pub source: String,
    pub external_id: String,
    pub external_title: String,
    pub shop_product_ref: ShopProductId,
    /// Denormalized by the backend; may be absent, in which case the
    /// client cross-references the cached product options.
    pub shop_product_title: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An external item that is not mapped yet; offered by the map dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOption {
    pub kind: MappingKind,
    pub source: String,
    pub external_id: String,
    pub title: String,
    pub price: Option<f64>,
}

impl SourceOption {
    pub fn label(&self) -> String {
        format!("[{}] {}", self.source, self.title)
    }
}
