use std::{
    fmt::{Display, Formatter},
    io::Write,
    num::NonZeroUsize,
    str::FromStr,
};

use chrono::TimeDelta;
use itertools::Itertools;

use crate::{
    cli::Query,
    core::{price::PriceRecord, provider::PriceSource, window::ChargingWindow},
    prelude::*,
    render::write_charging_window,
};

/// Whole hours of charging, written as `<N>h`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChargingDuration(pub NonZeroUsize);

impl FromStr for ChargingDuration {
    type Err = InvalidChargingDuration;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.strip_suffix('h')
            .and_then(|hours| hours.parse().ok())
            .map(Self)
            .ok_or(InvalidChargingDuration)
    }
}

impl Display for ChargingDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}

impl ChargingDuration {
    /// Number of consecutive records that cover the duration at the given resolution.
    ///
    /// Anything coarser than an hour counts as hourly.
    #[must_use]
    pub fn n_records(self, resolution: TimeDelta) -> NonZeroUsize {
        let per_hour = TimeDelta::hours(1)
            .num_seconds()
            .checked_div(resolution.num_seconds())
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(NonZeroUsize::MIN);
        self.0.saturating_mul(per_hour)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("expected a positive number of hours followed by `h`")]
pub struct InvalidChargingDuration;

/// Find and print the cheapest time to start charging, looking into the next day if possible.
#[instrument(skip_all, fields(duration = %duration))]
pub async fn charge(
    source: &impl PriceSource,
    query: &Query,
    duration: ChargingDuration,
    mut prices: Vec<PriceRecord>,
    out: &mut impl Write,
) -> Result {
    prices.extend(source.get_next_day_prices(query.date, query.zone).await);
    let resolution =
        prices.first().map_or_else(|| TimeDelta::hours(1), |record| record.interval.duration());
    let rates = prices.iter().map(|record| record.sek_per_kwh).collect_vec();
    let window = ChargingWindow::try_find_cheapest(&rates, duration.n_records(resolution))?;
    info!(
        window.start_index,
        window.mean_price,
        n_records = window.duration.get(),
        n_prices = rates.len(),
        "found the window",
    );
    let start = prices.get(window.start_index).context("the window starts past the prices")?;
    write_charging_window(out, start, &window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_parse_ok() {
        assert_eq!("5h".parse::<ChargingDuration>(), Ok(ChargingDuration(hours(5))));
        assert_eq!("24h".parse::<ChargingDuration>(), Ok(ChargingDuration(hours(24))));
    }

    #[test]
    fn test_parse_err() {
        for text in ["5", "h", "0h", "-2h", "2.5h", "5 h", "5H", "fem timmar"] {
            assert_eq!(text.parse::<ChargingDuration>(), Err(InvalidChargingDuration), "{text}");
        }
    }

    #[test]
    fn test_n_records() {
        let duration = ChargingDuration(hours(5));
        assert_eq!(duration.n_records(TimeDelta::hours(1)), hours(5));
        assert_eq!(duration.n_records(TimeDelta::minutes(15)), hours(20));
        assert_eq!(duration.n_records(TimeDelta::hours(2)), hours(5));
        assert_eq!(duration.n_records(TimeDelta::zero()), hours(5));
    }
}
