pub mod aggregate;
pub mod request;

pub use aggregate::{CompetitorProduct, CompetitorProductId};
pub use request::{ScanRequest, ScanTriggered};
