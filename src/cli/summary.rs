use std::io::Write;

use crate::{
    cli::Query,
    core::{
        price::PriceRecord,
        provider::PriceSource,
        series::{sort_by_price_descending, to_hourly},
        summary::Summary,
    },
    prelude::*,
    render::{write_prices, write_summary},
};

/// Print the day's hourly statistics, then every price of the day and the next one.
#[instrument(skip_all, fields(sorted = query.sorted))]
pub async fn summarize(
    source: &impl PriceSource,
    query: &Query,
    mut prices: Vec<PriceRecord>,
    out: &mut impl Write,
) -> Result {
    {
        let hourly = to_hourly(&prices);
        let summary = Summary::from_prices(hourly.iter().map(|record| record.sek_per_kwh))
            .context("no prices to summarize")?;
        debug!(n_hours = hourly.len(), ?summary, "summarized");
        write_summary(out, &hourly, &summary)?;
    }

    prices.extend(source.get_next_day_prices(query.date, query.zone).await);
    if query.sorted {
        sort_by_price_descending(&mut prices);
    }
    write_prices(out, &prices)
}
