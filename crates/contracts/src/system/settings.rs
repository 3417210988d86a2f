use serde::{Deserialize, Serialize};

/// How proposed prices are rounded before being written to the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceRounding {
    None,
    /// Round down to a ...99 ending.
    EndNinetyNine,
    /// Round to the nearest multiple of ten.
    NearestTen,
}

impl PriceRounding {
    pub fn label(&self) -> &'static str {
        match self {
            PriceRounding::None => "No rounding",
            PriceRounding::EndNinetyNine => "End with 99",
            PriceRounding::NearestTen => "Nearest 10",
        }
    }

    pub const ALL: [PriceRounding; 3] = [
        PriceRounding::None,
        PriceRounding::EndNinetyNine,
        PriceRounding::NearestTen,
    ];
}

/// Tool-wide knobs edited on the settings tab, stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub scan_interval_minutes: u32,
    pub price_rounding: PriceRounding,
    /// Plans proposing a margin below this floor are flagged, percent.
    pub margin_floor_percent: f64,
    pub auto_apply_plans: bool,
    pub notify_email: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            scan_interval_minutes: 120,
            price_rounding: PriceRounding::None,
            margin_floor_percent: 10.0,
            auto_apply_plans: false,
            notify_email: None,
        }
    }
}
