mod charging;
mod summary;

use std::{ffi::OsString, io::Write};

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use reqwest::Url;

pub use self::charging::ChargingDuration;
use crate::{
    api::elprisetjustnu,
    cli::{charging::charge, summary::summarize},
    core::{error::ReportError, provider::PriceSource, zone::Zone},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, args_override_self = true, disable_version_flag = true)]
#[must_use]
pub struct Args {
    /// Price zone: `SE1`, `SE2`, `SE3` or `SE4`.
    #[clap(long, value_name = "SE1|SE2|SE3|SE4", allow_hyphen_values = true)]
    pub zone: Option<String>,

    /// Price date, today by default.
    #[clap(long, value_name = "yyyy-MM-dd", allow_hyphen_values = true)]
    pub date: Option<String>,

    /// List the prices from the most to the least expensive.
    #[clap(long)]
    pub sorted: bool,

    /// Find when to start charging for the number of hours, for example `4h`.
    #[clap(long, value_name = "Nh", allow_hyphen_values = true)]
    pub charging: Option<String>,

    /// Price API base URL.
    #[clap(
        long = "api-base-url",
        env = "ELPRIS_API_BASE_URL",
        default_value = elprisetjustnu::DEFAULT_BASE_URL,
    )]
    pub api_base_url: Url,
}

/// Flags that take the next argument as their value.
const VALUE_FLAGS: [&str; 4] = ["--zone", "--date", "--charging", "--api-base-url"];

const SWITCHES: [&str; 2] = ["--sorted", "--help"];

/// Reduce the raw command line to what [`Args`] understands.
///
/// Unknown arguments are dropped, and so is a value flag without a value.
/// A value flag takes the next argument as is, even if it looks like a flag.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        let flag = arg.to_string_lossy().into_owned();
        if VALUE_FLAGS.contains(&flag.as_str()) {
            match args.next() {
                Some(value) => {
                    let mut pair = OsString::from(format!("{flag}="));
                    pair.push(value);
                    normalized.push(pair);
                }
                None => debug!(%flag, "ignoring the flag without a value"),
            }
        } else if SWITCHES.contains(&flag.as_str()) {
            normalized.push(arg);
        } else {
            debug!(%flag, "ignoring the unknown argument");
        }
    }
    normalized
}

/// Validated request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Query {
    pub zone: Zone,
    pub date: NaiveDate,
    pub sorted: bool,
    pub charging: Option<ChargingDuration>,
}

impl Args {
    /// Validate the arguments. Empty values count as absent.
    pub fn validate(&self, today: NaiveDate) -> Result<Query, ReportError> {
        let zone = match non_empty(self.zone.as_deref()) {
            None => return Err(ReportError::MissingZone),
            Some(code) => {
                code.parse::<Zone>().map_err(|_| ReportError::InvalidZone(code.to_owned()))?
            }
        };
        let date = match non_empty(self.date.as_deref()) {
            None => today,
            Some(date) => {
                date.parse::<NaiveDate>().map_err(|_| ReportError::InvalidDate(date.to_owned()))?
            }
        };
        let charging = non_empty(self.charging.as_deref())
            .map(|duration| {
                duration
                    .parse::<ChargingDuration>()
                    .map_err(|_| ReportError::InvalidChargingDuration(duration.to_owned()))
            })
            .transpose()?;
        Ok(Query { zone, date, sorted: self.sorted, charging })
    }
}

/// Print the usage, for an empty command line.
pub fn write_usage(out: &mut impl Write) -> Result {
    Args::command().write_help(out).context("failed to write the usage")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Fetch the day's prices and print either the charging window or the price report.
#[instrument(skip_all, fields(zone = %query.zone, on = %query.date))]
pub async fn run(source: &impl PriceSource, query: &Query, out: &mut impl Write) -> Result {
    let prices = source.get_prices(query.date, query.zone).await?;
    if prices.is_empty() {
        return Err(ReportError::NoPrices(query.date).into());
    }
    info!(n_prices = prices.len(), "fetched the prices");

    match query.charging {
        Some(duration) => charge(source, query, duration, prices, out).await,
        None => summarize(source, query, prices, out).await,
    }
}
