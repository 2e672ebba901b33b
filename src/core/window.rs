use std::num::NonZeroUsize;

use crate::core::error::ReportError;

/// Contiguous run of records with the lowest mean price.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct ChargingWindow {
    /// Index of the first record in the searched series.
    pub start_index: usize,

    /// Number of records in the window.
    pub duration: NonZeroUsize,

    pub mean_price: f64,
}

impl ChargingWindow {
    /// Find the window of `duration` consecutive prices with the lowest mean.
    ///
    /// On equal means the earliest window wins. Each window is summed left to right,
    /// so the result does not depend on how the windows are enumerated.
    pub fn try_find_cheapest(prices: &[f64], duration: NonZeroUsize) -> Result<Self, ReportError> {
        if duration.get() > prices.len() {
            return Err(ReportError::InsufficientData {
                requested: duration.get(),
                available: prices.len(),
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let divisor = duration.get() as f64;

        let mut cheapest: Option<Self> = None;
        for (start_index, window) in prices.windows(duration.get()).enumerate() {
            let mean_price = window.iter().sum::<f64>() / divisor;
            if cheapest.is_none_or(|cheapest| mean_price < cheapest.mean_price) {
                cheapest = Some(Self { start_index, duration, mean_price });
            }
        }
        cheapest.ok_or(ReportError::InsufficientData {
            requested: duration.get(),
            available: prices.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hours(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_picks_lowest_mean() {
        let window = ChargingWindow::try_find_cheapest(&[1.0, 2.0, 0.5, 3.0], hours(2)).unwrap();
        assert_eq!(window.start_index, 1);
        assert_eq!(window.duration, hours(2));
        assert_abs_diff_eq!(window.mean_price, 1.25);
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let window = ChargingWindow::try_find_cheapest(&[3.0, 1.0, 1.0, 3.0, 1.0, 1.0], hours(2))
            .unwrap();
        assert_eq!(window.start_index, 1);
    }

    #[test]
    fn test_flat_series_starts_at_zero() {
        let window = ChargingWindow::try_find_cheapest(&[1.0; 24], hours(5)).unwrap();
        assert_eq!(window.start_index, 0);
        assert_abs_diff_eq!(window.mean_price, 1.0);
    }

    #[test]
    fn test_whole_series() {
        let window = ChargingWindow::try_find_cheapest(&[1.0, 2.0, 3.0], hours(3)).unwrap();
        assert_eq!(window.start_index, 0);
        assert_abs_diff_eq!(window.mean_price, 2.0);
    }

    #[test]
    fn test_negative_prices() {
        let window = ChargingWindow::try_find_cheapest(&[0.1, -0.2, -0.3, 0.4], hours(2)).unwrap();
        assert_eq!(window.start_index, 1);
        assert_abs_diff_eq!(window.mean_price, -0.25);
    }

    #[test]
    fn test_insufficient_data() {
        let error = ChargingWindow::try_find_cheapest(&[1.0, 2.0], hours(3)).unwrap_err();
        assert!(matches!(error, ReportError::InsufficientData { requested: 3, available: 2 }));
        assert!(ChargingWindow::try_find_cheapest(&[], hours(1)).is_err());
    }

    /// Compare against an exhaustive search for every duration.
    #[test]
    fn test_matches_exhaustive_search() {
        let prices: Vec<f64> =
            (0_i32..48).map(|i| ((f64::from(i) * 0.7).sin() * 1.5 + 1.0).round() / 4.0).collect();
        for duration in 1..=prices.len() {
            let window = ChargingWindow::try_find_cheapest(&prices, hours(duration)).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let means: Vec<f64> = prices
                .windows(duration)
                .map(|window| window.iter().sum::<f64>() / duration as f64)
                .collect();
            assert!(means.iter().all(|mean| window.mean_price <= *mean));
            assert!(means[..window.start_index].iter().all(|mean| *mean > window.mean_price));
        }
    }
}
