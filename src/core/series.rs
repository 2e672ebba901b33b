mod aggregate;

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

pub use self::aggregate::to_hourly;
use crate::core::price::PriceRecord;

/// Sort the prices from the most to the least expensive.
///
/// The sort is stable: equal prices stay in their chronological order.
pub fn sort_by_price_descending(prices: &mut [PriceRecord]) {
    prices.sort_by_key(|record| Reverse(OrderedFloat(record.sek_per_kwh)));
}
