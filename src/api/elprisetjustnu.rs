//! [Elpriset just nu](https://www.elprisetjustnu.se/elpris-api) client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{
    core::{interval::Interval, price::PriceRecord, provider::PriceSource, zone::Zone},
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se/api/v1/prices";

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/{yyyy}/{MM}-{dd}_{zone}.json`
    fn url(&self, on: NaiveDate, zone: Zone) -> Result<Url> {
        let url = format!(
            "{}/{}_{zone}.json",
            self.base_url.as_str().trim_end_matches('/'),
            on.format("%Y/%m-%d"),
        );
        Url::parse(&url).with_context(|| format!("invalid price URL: `{url}`"))
    }
}

#[async_trait]
impl PriceSource for Api {
    #[instrument(skip_all, fields(on = %on, zone = %zone))]
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<Vec<PriceRecord>> {
        let url = self.url(on, zone)?;
        info!(%url, "fetching…");
        let response = self.client.get(url).send().await.context("failed to call")?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("not published yet");
            return Ok(Vec::new());
        }
        let prices = response
            .error_for_status()
            .context("request failed")?
            .json::<Vec<Price>>()
            .await
            .context("failed to deserialize the response")?;
        info!(n_prices = prices.len(), "fetched");
        Ok(prices.into_iter().map(PriceRecord::from).collect())
    }
}

#[derive(Deserialize)]
struct Price {
    #[serde(rename = "SEK_per_kWh")]
    sek_per_kwh: f64,

    #[serde(rename = "EUR_per_kWh")]
    eur_per_kwh: f64,

    #[serde(rename = "EXR")]
    exchange_rate: f64,

    time_start: DateTime<FixedOffset>,
    time_end: DateTime<FixedOffset>,
}

impl From<Price> for PriceRecord {
    fn from(price: Price) -> Self {
        Self {
            sek_per_kwh: price.sek_per_kwh,
            eur_per_kwh: price.eur_per_kwh,
            exchange_rate: price.exchange_rate,
            interval: Interval::new(price.time_start, price.time_end),
        }
    }
}
