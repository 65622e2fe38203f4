//! Reasonability evaluator: ratio banding, score ranges, and device factors.

mod common;

use common::CURRENT_YEAR;
use device_pricing::pricing::reasonability::price_ratio;
use device_pricing::{Condition, DeviceSpecs, Impact, PlatformPrice, Verdict};

const MARKET_TRENDS: [&str; 4] = [
    "High Demand",
    "New Model Released",
    "Market Saturation",
    "Limited Availability",
];

fn offers(prices: &[f64]) -> Vec<PlatformPrice> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| PlatformPrice {
            platform: format!("Shop {}", i),
            price: *price,
            url: None,
            in_stock: true,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Banding
// ---------------------------------------------------------------------------

#[test]
fn ratio_point_eight_is_excellent() {
    let est = common::estimator();
    for seed in 0..50 {
        let result = est.reasonability().evaluate(
            &common::flagship(),
            10000.0,
            &offers(&[9500.0, 8000.0, 12000.0]),
            &mut common::seeded(seed),
        );
        assert_eq!(result.verdict, Verdict::Excellent);
        assert!((90..=100).contains(&result.score), "score {}", result.score);
        assert_eq!(result.ratio, Some(0.8));
    }
}

#[test]
fn ratio_one_point_one_is_poor() {
    let est = common::estimator();
    for seed in 0..50 {
        let result = est.reasonability().evaluate(
            &common::flagship(),
            10000.0,
            &offers(&[11000.0, 13000.0, 11500.0]),
            &mut common::seeded(seed),
        );
        assert_eq!(result.verdict, Verdict::Poor);
        assert!((40..=59).contains(&result.score), "score {}", result.score);
    }
}

#[test]
fn breakpoints_are_inclusive_upper_bounds() {
    assert_eq!(Verdict::from_ratio(0.5), Verdict::Excellent);
    assert_eq!(Verdict::from_ratio(0.85), Verdict::Excellent);
    assert_eq!(Verdict::from_ratio(0.9), Verdict::Good);
    assert_eq!(Verdict::from_ratio(0.95), Verdict::Good);
    assert_eq!(Verdict::from_ratio(1.0), Verdict::Fair);
    assert_eq!(Verdict::from_ratio(1.05), Verdict::Fair);
    assert_eq!(Verdict::from_ratio(1.15), Verdict::Poor);
    assert_eq!(Verdict::from_ratio(1.16), Verdict::Overpriced);
    assert_eq!(Verdict::from_ratio(3.0), Verdict::Overpriced);
}

#[test]
fn score_bands_descend_with_verdict() {
    let bands: Vec<(u8, u8)> = [
        Verdict::Excellent,
        Verdict::Good,
        Verdict::Fair,
        Verdict::Poor,
        Verdict::Overpriced,
    ]
    .iter()
    .map(|v| v.score_range())
    .collect();
    assert_eq!(bands[0], (90, 100));
    assert_eq!(bands[4], (20, 39));
    for pair in bands.windows(2) {
        assert!(pair[1].1 < pair[0].0, "{:?}", bands);
    }
}

#[test]
fn zero_estimate_falls_back_to_fair() {
    let est = common::estimator();
    let result = est.reasonability().evaluate(
        &common::flagship(),
        0.0,
        &offers(&[8000.0]),
        &mut common::seeded(7),
    );
    assert_eq!(result.verdict, Verdict::Fair);
    assert_eq!(result.ratio, None);
    assert!((60..=74).contains(&result.score));
}

#[test]
fn no_offers_falls_back_to_fair() {
    let est = common::estimator();
    let result =
        est.reasonability()
            .evaluate(&common::flagship(), 10000.0, &[], &mut common::seeded(7));
    assert_eq!(result.verdict, Verdict::Fair);
    assert_eq!(result.ratio, None);
}

#[test]
fn price_ratio_uses_cheapest_offer() {
    assert_eq!(price_ratio(20000.0, &offers(&[30000.0, 10000.0, 25000.0])), Some(0.5));
    assert_eq!(price_ratio(-5.0, &offers(&[100.0])), None);
    assert_eq!(price_ratio(f64::NAN, &offers(&[100.0])), None);
}

// ---------------------------------------------------------------------------
// Factors
// ---------------------------------------------------------------------------

#[test]
fn flagship_factors_in_fixed_order() {
    let est = common::estimator();
    let factors = est
        .reasonability()
        .factors(&common::flagship(), &mut common::zeros());
    let names: Vec<&str> = factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Recent Release",
            "New Condition",
            "Premium Brand",
            "High Storage Capacity",
            "High Demand",
        ]
    );
    assert!(factors.iter().all(|f| f.impact == Impact::Positive));
    assert!(factors[2].description.starts_with("Apple devices"));
    assert!(factors[3].description.starts_with("256GB"));
}

#[test]
fn worn_generic_factors_are_negative() {
    let est = common::estimator();
    let factors = est
        .reasonability()
        .factors(&common::worn_generic(), &mut common::seeded(3));
    assert_eq!(factors.len(), 3);

    assert_eq!(factors[0].factor, "Older Model");
    assert_eq!(factors[0].impact, Impact::Negative);
    assert!(factors[0].description.contains("5 years old"));

    assert_eq!(factors[1].factor, "Poor Condition");
    assert_eq!(factors[1].impact, Impact::Negative);
    assert!(factors[1].description.contains("poor condition"));

    assert!(MARKET_TRENDS.contains(&factors[2].factor.as_str()));
}

#[test]
fn moderate_age_and_good_condition_are_neutral() {
    let est = common::estimator();
    let specs = DeviceSpecs::new("Google", "Pixel", CURRENT_YEAR - 3).with_condition(Condition::Good);
    let factors = est.reasonability().factors(&specs, &mut common::seeded(1));

    assert_eq!(factors[0].factor, "Moderately Recent");
    assert_eq!(factors[0].impact, Impact::Neutral);
    assert!(factors[0].description.contains("3 years old"));
    assert_eq!(factors[1].factor, "Good Condition");
    assert_eq!(factors[1].impact, Impact::Neutral);
    // Google is not on the premium allowlist.
    assert_eq!(factors.len(), 3);
}

#[test]
fn like_new_is_labelled_and_positive() {
    let est = common::estimator();
    let specs = DeviceSpecs::new("samsung", "Tab", CURRENT_YEAR - 1).with_condition(Condition::LikeNew);
    let factors = est.reasonability().factors(&specs, &mut common::seeded(1));
    assert_eq!(factors[0].factor, "Recent Release");
    assert_eq!(factors[1].factor, "Like New Condition");
    assert_eq!(factors[1].impact, Impact::Positive);
    assert_eq!(factors[2].factor, "Premium Brand");
}

#[test]
fn storage_below_threshold_adds_no_factor() {
    let est = common::estimator();
    let specs = DeviceSpecs::new("Nokia", "X", CURRENT_YEAR).with_storage(128);
    let factors = est.reasonability().factors(&specs, &mut common::seeded(1));
    assert!(factors.iter().all(|f| f.factor != "High Storage Capacity"));
}

#[test]
fn exactly_one_market_trend_is_last() {
    let est = common::estimator();
    let mut seen = std::collections::HashSet::new();
    for seed in 0..200 {
        let factors = est
            .reasonability()
            .factors(&common::flagship(), &mut common::seeded(seed));
        let trends: Vec<&str> = factors
            .iter()
            .map(|f| f.factor.as_str())
            .filter(|name| MARKET_TRENDS.contains(name))
            .collect();
        assert_eq!(trends.len(), 1);
        assert_eq!(factors.last().map(|f| f.factor.as_str()), Some(trends[0]));
        seen.insert(trends[0].to_string());
    }
    assert_eq!(seen.len(), 4);
}
