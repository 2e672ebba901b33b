use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::{
    core::{price::PriceRecord, zone::Zone},
    prelude::*,
};

/// Day-ahead price publisher.
#[async_trait]
pub trait PriceSource: Sync {
    /// Get the prices for the whole day, or an empty list if they are not published yet.
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<Vec<PriceRecord>>;

    /// Get the following day's prices, treating any failure as absent data.
    #[instrument(skip_all, fields(zone = %zone))]
    async fn get_next_day_prices(&self, on: NaiveDate, zone: Zone) -> Vec<PriceRecord> {
        let Some(next_date) = on.checked_add_days(Days::new(1)) else {
            return Vec::new();
        };
        match self.get_prices(next_date, zone).await {
            Ok(prices) => {
                debug!(%next_date, n_prices = prices.len(), "fetched the next day");
                prices
            }
            Err(error) => {
                warn!(%next_date, "continuing without the next day: {error:#}");
                Vec::new()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{fake::FakeSource, *};
    use crate::core::price::fixtures::{date, hourly};

    #[tokio::test]
    async fn test_next_day_ok() {
        let tomorrow = date(2025, 10, 20);
        let source = FakeSource::default().with(tomorrow, Zone::Se3, hourly(tomorrow, &[1.0; 24]));
        assert_eq!(source.get_next_day_prices(date(2025, 10, 19), Zone::Se3).await.len(), 24);
        assert!(source.get_next_day_prices(date(2025, 10, 19), Zone::Se4).await.is_empty());
    }

    #[tokio::test]
    async fn test_next_day_failure_is_absence() {
        let source = FakeSource::default().failing_on(date(2025, 10, 20));
        assert!(source.get_prices(date(2025, 10, 20), Zone::Se3).await.is_err());
        assert!(source.get_next_day_prices(date(2025, 10, 19), Zone::Se3).await.is_empty());
    }

    #[tokio::test]
    async fn test_next_day_past_calendar_end() {
        let source = FakeSource::default();
        assert!(source.get_next_day_prices(NaiveDate::MAX, Zone::Se1).await.is_empty());
    }
}
