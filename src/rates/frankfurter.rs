use super::{LatestRates, RangeRates, Requester};
use crate::alias::{DATE_FORMAT, Date};
use crate::error::Error;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.frankfurter.app";

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::new_http(format!("request failed : {error}"))
    }
}

#[derive(Debug, Deserialize)]
struct FrankfurterRange {
    #[serde(default, deserialize_with = "deserialize_daily_rates")]
    rates: Vec<(String, HashMap<String, f64>)>,
}

/// Numeric entries of a `{ <CODE>: number }` object; anything else yields no rate.
fn numeric_rates(value: &Value) -> HashMap<String, f64> {
    value
        .as_object()
        .map(|values| {
            values
                .iter()
                .filter_map(|(currency, value)| value.as_f64().map(|rate| (currency.clone(), rate)))
                .collect()
        })
        .unwrap_or_default()
}

fn deserialize_daily_rates<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, HashMap<String, f64>)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let days: Value = Value::deserialize(deserializer)?;
    Ok(days
        .as_object()
        .map(|days| {
            days.iter()
                .map(|(date, rates)| (date.clone(), numeric_rates(rates)))
                .collect()
        })
        .unwrap_or_default())
}

/// Client for the frankfurter.app exchange-rate API.
pub struct FrankfurterRequester {
    reqwest_client: Client,
    api_base: String,
}

impl FrankfurterRequester {
    pub fn new<T: Into<String>>(api_base: T) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|error| Error::new_http(format!("failed to init reqwest : {error}")))?;
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self {
            reqwest_client: client,
            api_base,
        })
    }

    fn request_body(&self, url: &str, from: &str, to: &str) -> Result<String, Error> {
        debug!("request data from url {} from:{} to:{}", url, from, to);
        let response = self
            .reqwest_client
            .get(url)
            .query(&[("from", from), ("to", to)])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::new_http(format!("HTTP {}", status.as_u16())));
        }
        let output = response.text()?;
        debug!("request result: {}", output);
        Ok(output)
    }
}

impl Requester for FrankfurterRequester {
    fn latest(&self, from: &str, to: &str) -> Result<LatestRates, Error> {
        let url = format!("{}/latest", self.api_base);
        let output = self.request_body(&url, from, to)?;
        let result: Value = serde_json::from_str(&output)
            .map_err(|error| Error::new_rate(format!("invalid rate payload : {error}")))?;
        let rates = result.get("rates").map(numeric_rates).unwrap_or_default();
        Ok(LatestRates { rates })
    }

    fn range(&self, from: &str, to: &str, begin: Date, end: Date) -> Result<RangeRates, Error> {
        info!(
            "try to request history for {}/{} between {} to {}",
            from,
            to,
            begin.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );
        let url = format!(
            "{}/{}..{}",
            self.api_base,
            begin.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );
        let output = self.request_body(&url, from, to)?;
        let result: FrankfurterRange = serde_json::from_str(&output)
            .map_err(|error| Error::new_rate(format!("invalid history payload : {error}")))?;
        info!(
            "request history for {}/{} done nb_record:{}",
            from,
            to,
            result.rates.len()
        );
        Ok(RangeRates {
            rates: result.rates,
        })
    }
}
