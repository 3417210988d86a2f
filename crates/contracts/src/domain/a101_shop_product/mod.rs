pub mod aggregate;

pub use aggregate::{ProductOption, ShopProduct, ShopProductDetail, ShopProductId, ShopVariant};
