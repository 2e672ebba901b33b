use crate::core::interval::Interval;

/// Single published spot price.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct PriceRecord {
    /// SEK per kilowatt-hour.
    pub sek_per_kwh: f64,

    /// EUR per kilowatt-hour.
    pub eur_per_kwh: f64,

    /// SEK per EUR.
    pub exchange_rate: f64,

    pub interval: Interval,
}
