use serde::{Deserialize, Serialize};

/// Apply outcome; the backend applies line by line and reports both counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPlanResult {
    pub applied_count: u32,
    pub failed_count: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}
