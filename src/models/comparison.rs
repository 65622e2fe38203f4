use super::DeviceSpecs;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComparisonResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub device_name: String,
    pub brand: String,
    pub specs: DeviceSpecs,
    pub price: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub recommendation_score: u8,
}

/// Sort highest recommendation first.
pub fn sort_by_recommendation(results: &mut [ComparisonResult]) {
    results.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));
}

/// Sort cheapest first.
pub fn sort_by_price(results: &mut [ComparisonResult]) {
    results.sort_by(|a, b| a.price.total_cmp(&b.price));
}
