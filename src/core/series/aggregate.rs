use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Timelike};

use crate::core::price::PriceRecord;

/// Series longer than this are published at a sub-hourly resolution.
pub const HOURS_PER_DAY: usize = 24;

impl<T> AggregateHourly for T where T: ?Sized {}

pub trait AggregateHourly {
    /// Average the prices within each hour of the day.
    ///
    /// Groups follow the order in which their hour first appears. The EUR price and
    /// the exchange rate come from the first record of the hour.
    #[must_use]
    fn average_hourly<'a>(self) -> Vec<PriceRecord>
    where
        Self: Sized + IntoIterator<Item = &'a PriceRecord>,
    {
        let mut groups: Vec<HourGroup> = Vec::new();
        for record in self {
            let hour = record.interval.start.hour();
            match groups.iter_mut().find(|group| group.hour == hour) {
                Some(group) => group.push(record),
                None => groups.push(HourGroup::new(hour, record)),
            }
        }
        groups.into_iter().map(HourGroup::into_record).collect()
    }
}

/// Collapse the series to hourly prices, unless it is hourly already.
#[must_use]
pub fn to_hourly(prices: &[PriceRecord]) -> Cow<'_, [PriceRecord]> {
    if prices.len() > HOURS_PER_DAY {
        Cow::Owned(prices.iter().average_hourly())
    } else {
        Cow::Borrowed(prices)
    }
}

struct HourGroup {
    hour: u32,
    first: PriceRecord,
    end: DateTime<FixedOffset>,
    total: f64,
    count: u32,
}

impl HourGroup {
    fn new(hour: u32, first: &PriceRecord) -> Self {
        Self { hour, first: *first, end: first.interval.end, total: first.sek_per_kwh, count: 1 }
    }

    fn push(&mut self, record: &PriceRecord) {
        self.end = record.interval.end;
        self.total += record.sek_per_kwh;
        self.count += 1;
    }

    fn into_record(self) -> PriceRecord {
        PriceRecord {
            sek_per_kwh: self.total / f64::from(self.count),
            interval: self.first.interval.with_end(self.end),
            ..self.first
        }
    }
}
