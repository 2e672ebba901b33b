use std::io::Write;

use crate::{
    core::{price::PriceRecord, summary::Summary, window::ChargingWindow},
    fmt::{FormattedHours, FormattedOre},
    prelude::*,
};

/// Write the lowest, highest and mean price of the hourly series, followed by an empty line.
pub fn write_summary(out: &mut impl Write, hourly: &[PriceRecord], summary: &Summary) -> Result {
    let lowest = hourly.get(summary.min.index).context("lowest price is out of the series")?;
    let highest = hourly.get(summary.max.index).context("highest price is out of the series")?;
    writeln!(
        out,
        "Lägsta pris: {}, {} öre",
        FormattedHours(lowest.interval),
        FormattedOre(summary.min.price),
    )?;
    writeln!(
        out,
        "Högsta pris: {}, {} öre",
        FormattedHours(highest.interval),
        FormattedOre(summary.max.price),
    )?;
    writeln!(out, "Medelpris: {} öre", FormattedOre(summary.mean))?;
    writeln!(out)?;
    Ok(())
}

/// Write one line per record, in the given order.
pub fn write_prices<'a>(
    out: &mut impl Write,
    prices: impl IntoIterator<Item = &'a PriceRecord>,
) -> Result {
    for record in prices {
        writeln!(
            out,
            "{} {} öre",
            FormattedHours(record.interval),
            FormattedOre(record.sek_per_kwh),
        )?;
    }
    Ok(())
}

pub fn write_charging_window(
    out: &mut impl Write,
    start: &PriceRecord,
    window: &ChargingWindow,
) -> Result {
    writeln!(out, "Påbörja laddning kl {}", start.interval.start.format("%H:%M"))?;
    writeln!(out, "Medelpris för fönster: {} öre", FormattedOre(window.mean_price))?;
    Ok(())
}
