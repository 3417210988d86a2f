use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanLogId(pub Uuid);

impl ScanLogId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ScanLogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanOutcome {
    Success,
    Partial,
    Failed,
    Running,
}

impl ScanOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ScanOutcome::Success => "Success",
            ScanOutcome::Partial => "Partial",
            ScanOutcome::Failed => "Failed",
            ScanOutcome::Running => "Running",
        }
    }
}

/// Read-only record of one scraping run, displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLog {
    pub id: ScanLogId,
    pub source: String,
    pub outcome: ScanOutcome,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    pub items_scanned: u32,
    pub items_failed: u32,
    pub message: Option<String>,
}
