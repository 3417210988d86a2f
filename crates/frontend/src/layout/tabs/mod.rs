pub mod key;
pub mod page;
pub mod registry;

pub use key::{TabKey, DYNAMIC_CONTAINER_ID};
pub use page::{DynamicTabHost, StaticTabPage};
