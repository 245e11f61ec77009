//! Six-period availability forecasting with widening confidence bands.
//!
//! The forecast is a projection artifact, intentionally stochastic per call.
//! Its testable contract is the set of invariants (bounds ordering, margin
//! growth, status thresholds), not exact values.

use rand::Rng;
use types::{AvailabilityStatus, ForecastPoint, RiskTier, VolatilityClass};

/// Number of forward periods in a forecast.
pub const FORECAST_PERIODS: usize = 6;

/// Margin added per period of horizon, points.
const HORIZON_MARGIN_STEP: f64 = 5.0;

fn base_score(tier: RiskTier) -> f64 {
    match tier {
        RiskTier::Critical => 30.0,
        RiskTier::Elevated => 60.0,
        RiskTier::Stable => 85.0,
    }
}

fn score_variance(volatility: VolatilityClass) -> f64 {
    match volatility {
        VolatilityClass::High => 40.0,
        VolatilityClass::Medium => 20.0,
        VolatilityClass::Low => 10.0,
    }
}

/// Derive a six-period availability forecast from a material's risk tier and
/// realized volatility class.
///
/// Each period's point score is the tier base plus a uniform shift of at
/// most half the volatility variance, clamped to [0, 100]. The confidence
/// margin grows strictly with the horizon (`variance/2 + index*5`), so
/// uncertainty widens period over period; bounds are clamped to [0, 100].
pub fn forecast_availability(
    tier: RiskTier,
    volatility: VolatilityClass,
    rng: &mut impl Rng,
) -> Vec<ForecastPoint> {
    let base = base_score(tier);
    let variance = score_variance(volatility);

    (0..FORECAST_PERIODS)
        .map(|idx| {
            let shift = rng.random_range(-0.5..0.5) * variance;
            let score = (base + shift).clamp(0.0, 100.0);

            let margin = variance * 0.5 + idx as f64 * HORIZON_MARGIN_STEP;
            let lower_bound = (score - margin).max(0.0).floor() as u32;
            let upper_bound = (score + margin).min(100.0).floor() as u32;
            let score = score.floor() as u32;

            ForecastPoint {
                month: format!("M+{}", idx + 1),
                status: AvailabilityStatus::from_score(score),
                score,
                lower_bound,
                upper_bound,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_forecast_has_six_labeled_periods() {
        let mut rng = StdRng::seed_from_u64(42);
        let forecast =
            forecast_availability(RiskTier::Elevated, VolatilityClass::Medium, &mut rng);

        assert_eq!(forecast.len(), FORECAST_PERIODS);
        let labels: Vec<&str> = forecast.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, ["M+1", "M+2", "M+3", "M+4", "M+5", "M+6"]);
    }

    #[test]
    fn test_bounds_bracket_score_within_range() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for tier in [RiskTier::Stable, RiskTier::Elevated, RiskTier::Critical] {
                for vol in [
                    VolatilityClass::Low,
                    VolatilityClass::Medium,
                    VolatilityClass::High,
                ] {
                    for point in forecast_availability(tier, vol, &mut rng) {
                        assert!(point.lower_bound <= point.score);
                        assert!(point.score <= point.upper_bound);
                        assert!(point.upper_bound <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn test_interval_widens_with_horizon() {
        // Elevated/Low keeps every bound strictly inside [0, 100], so the
        // clamp never bites and the width is exactly twice the margin.
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast =
                forecast_availability(RiskTier::Elevated, VolatilityClass::Low, &mut rng);

            let widths: Vec<u32> = forecast
                .iter()
                .map(|p| p.upper_bound - p.lower_bound)
                .collect();
            for pair in widths.windows(2) {
                assert!(pair[1] >= pair[0], "seed {seed}: widths {widths:?}");
            }
        }
    }

    #[test]
    fn test_status_matches_score_thresholds() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for tier in [RiskTier::Stable, RiskTier::Elevated, RiskTier::Critical] {
                for point in forecast_availability(tier, VolatilityClass::High, &mut rng) {
                    assert_eq!(point.status, AvailabilityStatus::from_score(point.score));
                }
            }
        }
    }

    #[test]
    fn test_critical_high_volatility_scores_stay_low() {
        // Critical base 30 with variance 40 can shift at most ±20.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for point in
                forecast_availability(RiskTier::Critical, VolatilityClass::High, &mut rng)
            {
                assert!(point.score < 50, "seed {seed}: score {}", point.score);
            }
        }
    }
}
