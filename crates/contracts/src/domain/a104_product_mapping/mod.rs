pub mod aggregate;
pub mod request;

pub use aggregate::{MappingKind, ProductMapping, ProductMappingId, SourceOption};
pub use request::CreateMappingRequest;
