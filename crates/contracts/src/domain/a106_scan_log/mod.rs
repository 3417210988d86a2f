pub mod aggregate;

pub use aggregate::{ScanLog, ScanLogId, ScanOutcome};
