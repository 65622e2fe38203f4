//! Trailing price history and forward price prediction.

use super::random::round_to_hundred;
use crate::config::PredictionConfig;
use crate::models::{PricePoint, PricePrediction};
use chrono::{Months, NaiveDate};
use rand::Rng;

// ---------------------------------------------------------------------------
// PriceHistoryGenerator
// ---------------------------------------------------------------------------

/// Fabricates one price per month ending at the reference month.
pub struct PriceHistoryGenerator {
    periods: usize,
    variance: f64,
    as_of: NaiveDate,
}

impl PriceHistoryGenerator {
    pub fn new(periods: usize, variance: f64, as_of: NaiveDate) -> Self {
        Self {
            periods,
            variance,
            as_of,
        }
    }

    /// Oldest first. A point `i` months back carries noise of up to
    /// `±variance * i`, so the current period equals `price` exactly.
    pub fn generate<R: Rng + ?Sized>(&self, price: f64, rng: &mut R) -> Vec<PricePoint> {
        let mut history = Vec::with_capacity(self.periods);
        for months_back in (0..self.periods).rev() {
            let noise = if self.variance > 0.0 {
                rng.gen_range(-self.variance..=self.variance)
            } else {
                0.0
            };
            let factor = 1.0 + noise * months_back as f64;
            history.push(PricePoint {
                date: self.period_label(months_back),
                price: round_to_hundred(price * factor),
            });
        }
        history
    }

    /// Label such as `"Jan 2026"` for the month `months_back` before the
    /// reference date.
    pub fn period_label(&self, months_back: usize) -> String {
        let month = u32::try_from(months_back)
            .ok()
            .and_then(|m| self.as_of.checked_sub_months(Months::new(m)))
            .unwrap_or(self.as_of);
        month.format("%b %Y").to_string()
    }
}

// ---------------------------------------------------------------------------
// PricePredictor
// ---------------------------------------------------------------------------

/// Three- and six-month outlook. Declines are more likely than rises.
pub struct PricePredictor<'a> {
    config: &'a PredictionConfig,
}

impl<'a> PricePredictor<'a> {
    pub fn new(config: &'a PredictionConfig) -> Self {
        Self { config }
    }

    pub fn predict<R: Rng + ?Sized>(&self, price: f64, rng: &mut R) -> PricePrediction {
        let c = self.config;
        let three_months = price
            * if rng.gen_bool(c.three_month_decline_probability) {
                c.three_month_decline
            } else {
                c.three_month_rise
            };
        let six_months = three_months
            * if rng.gen_bool(c.six_month_decline_probability) {
                c.six_month_decline
            } else {
                c.six_month_rise
            };
        PricePrediction {
            three_months: three_months.round().max(0.0),
            six_months: six_months.round().max(0.0),
        }
    }
}
