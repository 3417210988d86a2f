use contracts::system::settings::AppSettings;

use crate::shared::api::{get_json, put_json};

pub async fn fetch_settings() -> Result<AppSettings, String> {
    get_json("/api/v1/settings").await
}

pub async fn save_settings(settings: &AppSettings) -> Result<AppSettings, String> {
    put_json("/api/v1/settings", settings).await
}
