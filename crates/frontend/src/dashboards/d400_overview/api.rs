use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::domain::a106_scan_log::ScanLog;

use crate::shared::api::get_json;

pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    get_json("/api/v1/dashboard/summary").await
}

pub async fn fetch_recent_scans() -> Result<Vec<ScanLog>, String> {
    get_json("/api/v1/scan-logs/recent").await
}
