//! Bounded random-walk price history simulation.
//!
//! Fallback series generator used whenever a material has no live feed
//! mapping or the feed is unavailable. The walk is not mean-reverting: each
//! day applies an independent uniform perturbation, with a hard floor at
//! half the baseline price.

use chrono::{Days, NaiveDate};
use rand::Rng;
use types::{PricePoint, RiskTier};

/// Number of trailing days in a generated history.
pub const HISTORY_DAYS: usize = 30;

/// Fraction of the baseline price used as the walk's floor.
const FLOOR_FRACTION: f64 = 0.5;

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulation volatility factor for a material's risk tier.
pub fn simulation_volatility(tier: RiskTier) -> f64 {
    match tier {
        RiskTier::Critical => 0.05,
        RiskTier::Elevated | RiskTier::Stable => 0.03,
    }
}

/// Generate a trailing [`HISTORY_DAYS`]-day price series ending at `today`,
/// oldest first.
///
/// Starting from `baseline_price`, each day adds a uniform draw from
/// `[-0.5, 0.5) * baseline_price * volatility` to a running price. Whenever
/// the running price falls below half the baseline it is reset to exactly
/// that floor before being recorded. Values are rounded to 2 decimals.
///
/// Callers guarantee `baseline_price > 0` (enforced at catalog load) and
/// `volatility` in `[0, 1)`; a volatility of zero yields a flat line.
pub fn simulate_history(
    baseline_price: f64,
    volatility: f64,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<PricePoint> {
    let floor = baseline_price * FLOOR_FRACTION;
    let mut current = baseline_price;
    let mut history = Vec::with_capacity(HISTORY_DAYS);

    for offset in (0..HISTORY_DAYS as u64).rev() {
        let date = today - Days::new(offset);
        let change = rng.random_range(-0.5..0.5) * baseline_price * volatility;
        current += change;
        if current < floor {
            current = floor;
        }
        history.push(PricePoint::new(PricePoint::day_label(date), round2(current)));
    }

    history
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_history_has_exactly_30_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let history = simulate_history(100.0, 0.05, fixed_today(), &mut rng);
        assert_eq!(history.len(), HISTORY_DAYS);
    }

    #[test]
    fn test_history_dates_are_increasing_and_end_today() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = fixed_today();
        let history = simulate_history(100.0, 0.05, today, &mut rng);

        let expected: Vec<String> = (0..HISTORY_DAYS as u64)
            .rev()
            .map(|offset| PricePoint::day_label(today - Days::new(offset)))
            .collect();
        let actual: Vec<&str> = history.iter().map(|p| p.date.as_str()).collect();

        assert_eq!(actual, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(history.last().unwrap().date, PricePoint::day_label(today));
    }

    #[test]
    fn test_walk_never_breaks_the_floor() {
        // High volatility drives the walk into the floor often.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let history = simulate_history(100.0, 0.9, fixed_today(), &mut rng);
            for point in &history {
                assert!(
                    point.value >= 50.0,
                    "seed {seed}: {} below floor",
                    point.value
                );
            }
        }
    }

    #[test]
    fn test_zero_volatility_is_a_flat_line() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = simulate_history(42.5, 0.0, fixed_today(), &mut rng);
        assert!(history.iter().all(|p| p.value == 42.5));
    }

    #[test]
    fn test_same_seed_reproduces_the_series() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);

        let a = simulate_history(24.5, 0.03, fixed_today(), &mut rng_a);
        let b = simulate_history(24.5, 0.03, fixed_today(), &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_are_rounded_to_cents() {
        let mut rng = StdRng::seed_from_u64(9);
        let history = simulate_history(100.0, 0.05, fixed_today(), &mut rng);
        for point in &history {
            assert_eq!(point.value, round2(point.value));
        }
    }

    #[test]
    fn test_simulation_volatility_by_tier() {
        assert_eq!(simulation_volatility(RiskTier::Critical), 0.05);
        assert_eq!(simulation_volatility(RiskTier::Elevated), 0.03);
        assert_eq!(simulation_volatility(RiskTier::Stable), 0.03);
    }
}
