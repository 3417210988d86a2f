pub mod a101_shop_product;
pub mod a102_competitor_product;
pub mod a103_supplier_product;
pub mod a104_product_mapping;
pub mod a105_price_plan;
