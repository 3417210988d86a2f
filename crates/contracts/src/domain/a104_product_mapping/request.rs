use serde::{Deserialize, Serialize};

use super::aggregate::MappingKind;
use crate::domain::a101_shop_product::ShopProductId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingRequest {
    pub kind: MappingKind,
    pub source: String,
    pub external_id: String,
    pub shop_product_ref: ShopProductId,
}
