//! Realized volatility classification from a price series.

use serde::{Deserialize, Serialize};
use types::{PricePoint, VolatilityClass};

/// Day-over-day change of the latest point in a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayChange {
    /// Absolute change in price units.
    pub change: f64,
    /// Change as a percentage of the previous value.
    pub change_pct: f64,
}

/// Percentage-change thresholds separating the volatility classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityThresholds {
    /// Above this absolute change percentage the class is High.
    pub high_pct: f64,
    /// Above this absolute change percentage the class is Medium.
    pub medium_pct: f64,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            high_pct: 5.0,
            medium_pct: 2.0,
        }
    }
}

/// Change between the last two points of a series.
///
/// Returns `None` for series shorter than two points or a zero previous
/// value.
pub fn day_over_day(history: &[PricePoint]) -> Option<DayChange> {
    if history.len() < 2 {
        return None;
    }
    let prev = history[history.len() - 2].value;
    let last = history[history.len() - 1].value;
    if prev == 0.0 {
        return None;
    }

    let change = last - prev;
    Some(DayChange {
        change,
        change_pct: (change / prev) * 100.0,
    })
}

/// Bucket a day-over-day change percentage into a volatility class.
pub fn classify_volatility(
    change_pct: f64,
    thresholds: &VolatilityThresholds,
) -> VolatilityClass {
    let magnitude = change_pct.abs();
    if magnitude > thresholds.high_pct {
        VolatilityClass::High
    } else if magnitude > thresholds.medium_pct {
        VolatilityClass::Medium
    } else {
        VolatilityClass::Low
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<PricePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| PricePoint::new(format!("Day {i}"), *v))
            .collect()
    }

    #[test]
    fn test_day_over_day_change() {
        let history = series(&[100.0, 90.0, 99.0]);
        let change = day_over_day(&history).unwrap();

        assert!((change.change - 9.0).abs() < 1e-9);
        assert!((change.change_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_over_day_requires_two_points() {
        assert!(day_over_day(&series(&[100.0])).is_none());
        assert!(day_over_day(&[]).is_none());
    }

    #[test]
    fn test_day_over_day_zero_previous_value() {
        assert!(day_over_day(&series(&[0.0, 10.0])).is_none());
    }

    #[test]
    fn test_classification_boundaries_are_exclusive() {
        let thresholds = VolatilityThresholds::default();

        assert_eq!(classify_volatility(5.1, &thresholds), VolatilityClass::High);
        assert_eq!(classify_volatility(5.0, &thresholds), VolatilityClass::Medium);
        assert_eq!(classify_volatility(2.1, &thresholds), VolatilityClass::Medium);
        assert_eq!(classify_volatility(2.0, &thresholds), VolatilityClass::Low);
        assert_eq!(classify_volatility(0.0, &thresholds), VolatilityClass::Low);
    }

    #[test]
    fn test_classification_uses_magnitude() {
        let thresholds = VolatilityThresholds::default();
        assert_eq!(classify_volatility(-7.5, &thresholds), VolatilityClass::High);
        assert_eq!(classify_volatility(-3.0, &thresholds), VolatilityClass::Medium);
    }
}
