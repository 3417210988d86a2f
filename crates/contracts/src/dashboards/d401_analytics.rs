use serde::{Deserialize, Serialize};

/// Reporting window selector for the analytics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalyticsPeriod {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl AnalyticsPeriod {
    pub fn query_value(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Last7Days => "7d",
            AnalyticsPeriod::Last30Days => "30d",
            AnalyticsPeriod::Last90Days => "90d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Last7Days => "7 days",
            AnalyticsPeriod::Last30Days => "30 days",
            AnalyticsPeriod::Last90Days => "90 days",
        }
    }

    pub const ALL: [AnalyticsPeriod; 3] = [
        AnalyticsPeriod::Last7Days,
        AnalyticsPeriod::Last30Days,
        AnalyticsPeriod::Last90Days,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Mean competitor-vs-shop price gap over mapped products, percent.
    pub avg_price_gap_percent: f64,
    pub products_above_market: u64,
    pub products_below_market: u64,
    pub reprice_events: u64,
    /// Currency of the averaged price series.
    pub currency: String,
}

/// One day of the aggregated price history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: chrono::NaiveDate,
    pub avg_shop_price: f64,
    pub avg_competitor_price: f64,
}
