//! Simulation primitives for the derivation pipeline.
//!
//! Provides the bounded random-walk price simulator, the availability
//! forecaster, and realized-volatility classification. All randomness is
//! injected through a [`rand::Rng`] parameter, so the same seed reproduces
//! the same series.
//!
//! # Modules
//!
//! - [`price`]: trailing 30-day price history generation
//! - [`forecast`]: six-period availability forecast with confidence bands
//! - [`volatility`]: day-over-day change and volatility classification

pub mod forecast;
pub mod price;
pub mod volatility;

pub use forecast::{FORECAST_PERIODS, forecast_availability};
pub use price::{HISTORY_DAYS, round2, simulate_history, simulation_volatility};
pub use volatility::{DayChange, VolatilityThresholds, classify_volatility, day_over_day};
