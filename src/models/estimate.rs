use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Categorical deal quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Excellent,
    Good,
    Fair,
    Poor,
    Overpriced,
}

impl Verdict {
    /// Band a `lowest platform price / estimate` ratio. Lower is better.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.85 {
            Verdict::Excellent
        } else if ratio <= 0.95 {
            Verdict::Good
        } else if ratio <= 1.05 {
            Verdict::Fair
        } else if ratio <= 1.15 {
            Verdict::Poor
        } else {
            Verdict::Overpriced
        }
    }

    /// Inclusive score range `(min, max)` for the band.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            Verdict::Excellent => (90, 100),
            Verdict::Good => (75, 89),
            Verdict::Fair => (60, 74),
            Verdict::Poor => (40, 59),
            Verdict::Overpriced => (20, 39),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Excellent => "excellent",
            Verdict::Good => "good",
            Verdict::Fair => "fair",
            Verdict::Poor => "poor",
            Verdict::Overpriced => "overpriced",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReasonabilityFactor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonabilityFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

impl ReasonabilityFactor {
    pub fn new(factor: impl Into<String>, impact: Impact, description: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            impact,
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PlatformPrice / PricePoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPrice {
    pub platform: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub in_stock: bool,
}

/// One period of the trailing price history. `date` is a label such as
/// `"Mar 2026"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePrediction {
    pub three_months: f64,
    pub six_months: f64,
}

// ---------------------------------------------------------------------------
// PriceEstimate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub estimated_price: f64,
    pub price_range: PriceRange,
    pub reasonability_score: u8,
    pub reasonability_verdict: Verdict,
    pub reasonability_factors: Vec<ReasonabilityFactor>,
    pub platform_prices: Vec<PlatformPrice>,
    /// Oldest first; the last entry is the current period.
    pub price_history: Vec<PricePoint>,
    pub price_prediction: PricePrediction,
}

impl PriceEstimate {
    /// The cheapest retailer offer, if any.
    pub fn lowest_platform_price(&self) -> Option<&PlatformPrice> {
        self.platform_prices
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    /// Retailer offers sorted cheapest first.
    pub fn platforms_by_price(&self) -> Vec<&PlatformPrice> {
        let mut sorted: Vec<&PlatformPrice> = self.platform_prices.iter().collect();
        sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
        sorted
    }
}
