//! Value-for-money scoring.

use crate::data::Pricing;
use crate::normalize::{normalize, Scale};

const SCORE_MULTIPLIER: f64 = 100.0;

/// Price used for scoring: mean of prompt and completion rates, or the
/// prompt rate alone when the model has no completion price (embeddings).
pub fn average_price(pricing: &Pricing) -> f64 {
    if pricing.completion > 0.0 {
        (pricing.prompt + pricing.completion) / 2.0
    } else {
        pricing.prompt
    }
}

/// Normalized benchmark value per unit of price, times 100, rounded to two
/// decimals. Missing or zero benchmarks and non-positive prices score 0.
pub fn score(price_per_million: f64, benchmark: Option<f64>, scale: Scale) -> f64 {
    let value = match benchmark {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return 0.0,
    };
    if !price_per_million.is_finite() || price_per_million <= 0.0 {
        return 0.0;
    }

    let rounded = round2(normalize(value, scale) / price_per_million * SCORE_MULTIPLIER);
    // An ELO below the floor normalizes negative; scores never go below zero.
    // A vanishing price can overflow to infinity, which JSON cannot carry.
    if rounded.is_finite() && rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}

/// Two-decimal rounding of the exact binary value, ties to even.
fn round2(v: f64) -> f64 {
    format!("{:.2}", v).parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing(prompt: f64, completion: f64) -> Pricing {
        Pricing {
            prompt,
            completion,
            ..Pricing::default()
        }
    }

    #[test]
    fn test_average_price() {
        assert_eq!(average_price(&pricing(1.0, 3.0)), 2.0);
        assert_eq!(average_price(&pricing(0.02, 0.0)), 0.02);
        assert_eq!(average_price(&pricing(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_coding_score() {
        let price = average_price(&pricing(1.0, 3.0));
        assert_eq!(score(price, Some(50.0), Scale::Coding), 2500.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 72.3 / 45.0 * 100 = 160.666...
        assert_eq!(score(45.0, Some(72.3), Scale::Coding), 160.67);
    }

    #[test]
    fn test_elo_score_uses_normalized_value() {
        // (1356 - 1200) / 3 = 52; 52 / 4 * 100 = 1300
        assert_eq!(score(4.0, Some(1356.0), Scale::Elo), 1300.0);
    }

    #[test]
    fn test_missing_or_zero_benchmark_scores_zero() {
        assert_eq!(score(2.0, None, Scale::Coding), 0.0);
        assert_eq!(score(2.0, Some(0.0), Scale::Intelligence), 0.0);
    }

    #[test]
    fn test_non_positive_price_scores_zero() {
        assert_eq!(score(0.0, Some(50.0), Scale::Coding), 0.0);
        assert_eq!(score(-1.0, Some(50.0), Scale::Coding), 0.0);
        assert_eq!(score(f64::NAN, Some(50.0), Scale::Coding), 0.0);
    }

    #[test]
    fn test_never_negative() {
        let s = score(2.0, Some(1100.0), Scale::Elo);
        assert_eq!(s, 0.0);
        assert!(!s.is_nan());

        let overflow = score(1e-308, Some(50.0), Scale::Coding);
        assert_eq!(overflow, 0.0, "infinite score must collapse to zero");
        assert_eq!(score(1e-300, Some(f64::MAX), Scale::Coding), 0.0);
    }

    #[test]
    fn test_huge_finite_score_kept() {
        let s = score(1e-10, Some(50.0), Scale::Coding);
        assert!(s.is_finite());
        assert_eq!(s, 5e13);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(score(100.0, Some(0.125), Scale::Coding), 0.12);
    }
}
