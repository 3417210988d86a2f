pub mod aggregate;
pub mod request;

pub use aggregate::{SupplierProduct, SupplierProductId};
pub use request::{PriceUpdateRequest, PriceUpdateResult, SupplierScanTriggered};
