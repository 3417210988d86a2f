pub mod aggregate;
pub mod response;

pub use aggregate::{PricePlan, PricePlanId, PricePlanLine, PricePlanStatus};
pub use response::ApplyPlanResult;
