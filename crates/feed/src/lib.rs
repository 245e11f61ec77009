//! Live price feed client.
//!
//! Fetches monthly price series for exchange-traded materials from the
//! external quote API. The feed is advisory: every failure mode (timeout,
//! non-2xx status, malformed payload, missing data) resolves to `None`, and
//! the caller falls back to the deterministic simulator. Feed trouble is
//! never fatal to the pipeline.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use types::PricePoint;

mod config;

pub use config::FeedConfig;

/// Maximum number of series entries mapped into a history.
const MAX_POINTS: usize = 30;

/// Reason a feed fetch was abandoned. Internal: callers only see `None`.
#[derive(Debug, Error)]
enum FeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    data: Option<Vec<SeriesEntry>>,
}

#[derive(Debug, Deserialize)]
struct SeriesEntry {
    date: String,
    value: String,
}

/// HTTP client for the external price feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the trailing monthly series for a feed function code.
    ///
    /// Returns up to [`MAX_POINTS`] points in chronological order, or `None`
    /// on any failure. Errors are logged and swallowed; the caller is
    /// expected to fall back to simulation.
    pub async fn fetch_history(&self, function: &str) -> Option<Vec<PricePoint>> {
        match self.try_fetch(function).await {
            Ok(history) => {
                debug!(function, points = history.len(), "live series fetched");
                Some(history)
            }
            Err(err) => {
                warn!(function, error = %err, "live feed unavailable, falling back to simulation");
                None
            }
        }
    }

    async fn try_fetch(&self, function: &str) -> Result<Vec<PricePoint>, FeedError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("function", function),
                ("interval", "monthly"),
                ("apikey", self.config.api_key.as_str()),
            ])
            .timeout(self.config.timeout())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: SeriesResponse = response.json().await?;
        let entries = body.data.ok_or(FeedError::Malformed("missing data field"))?;

        map_series(entries)
    }
}

/// Map raw series entries (most recent first) to chronological price points.
fn map_series(entries: Vec<SeriesEntry>) -> Result<Vec<PricePoint>, FeedError> {
    if entries.len() < 2 {
        return Err(FeedError::Malformed("series too short"));
    }

    let mut points = Vec::with_capacity(entries.len().min(MAX_POINTS));
    for entry in entries.into_iter().take(MAX_POINTS) {
        let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d")
            .map_err(|_| FeedError::Malformed("unparseable date"))?;
        let value: f64 = entry
            .value
            .parse()
            .map_err(|_| FeedError::Malformed("unparseable value"))?;
        points.push(PricePoint::new(PricePoint::day_label(date), value));
    }

    points.reverse();
    Ok(points)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, value: &str) -> SeriesEntry {
        SeriesEntry {
            date: date.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_series_maps_to_chronological_points() {
        // Feed order is most recent first.
        let entries = vec![
            entry("2025-06-01", "4.20"),
            entry("2025-05-01", "4.10"),
            entry("2025-04-01", "4.00"),
        ];

        let points = map_series(entries).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "Apr 1");
        assert_eq!(points[2].date, "Jun 1");
        assert_eq!(points[0].value, 4.00);
        assert_eq!(points[2].value, 4.20);
    }

    #[test]
    fn test_series_truncates_to_30_most_recent() {
        let entries: Vec<SeriesEntry> = (0..40)
            .map(|i| entry(&format!("2024-{:02}-01", i % 12 + 1), "1.0"))
            .collect();

        let points = map_series(entries).unwrap();
        assert_eq!(points.len(), 30);
    }

    #[test]
    fn test_short_series_is_malformed() {
        assert!(map_series(vec![entry("2025-06-01", "4.20")]).is_err());
        assert!(map_series(Vec::new()).is_err());
    }

    #[test]
    fn test_bad_value_is_malformed() {
        let entries = vec![entry("2025-06-01", "n/a"), entry("2025-05-01", "4.10")];
        assert!(map_series(entries).is_err());
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let entries = vec![entry("June 2025", "4.20"), entry("2025-05-01", "4.10")];
        assert!(map_series(entries).is_err());
    }

    #[test]
    fn test_response_without_data_field_deserializes() {
        let body: SeriesResponse = serde_json::from_str("{}").unwrap();
        assert!(body.data.is_none());

        let body: SeriesResponse =
            serde_json::from_str(r#"{"data": [{"date": "2025-06-01", "value": "4.2"}]}"#).unwrap();
        assert_eq!(body.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_feed_resolves_to_none() {
        // Port 9 (discard) refuses connections immediately.
        let config = FeedConfig {
            api_key: "demo".to_string(),
            base_url: "http://127.0.0.1:9/query".to_string(),
            timeout_ms: 500,
        };
        let client = FeedClient::new(config);

        assert!(client.fetch_history("COPPER").await.is_none());
    }
}
