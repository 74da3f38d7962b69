use crate::alias::Date;
use crate::error::Error;
use std::collections::HashMap;

mod frankfurter;
pub use frankfurter::*;

/// Latest quotes for one base currency, keyed by target currency code.
///
/// Only numeric quotes survive decoding.
#[derive(Debug, Default, Clone)]
pub struct LatestRates {
    pub rates: HashMap<String, f64>,
}

impl LatestRates {
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }
}

/// Daily quotes over a date range, in the order the provider sent them.
#[derive(Debug, Default, Clone)]
pub struct RangeRates {
    pub rates: Vec<(String, HashMap<String, f64>)>,
}

pub trait Requester {
    fn latest(&self, from: &str, to: &str) -> Result<LatestRates, Error>;
    fn range(&self, from: &str, to: &str, begin: Date, end: Date) -> Result<RangeRates, Error>;
}

pub struct NullRequester;
impl Requester for NullRequester {
    fn latest(&self, _from: &str, _to: &str) -> Result<LatestRates, Error> {
        Ok(Default::default())
    }

    fn range(&self, _from: &str, _to: &str, _begin: Date, _end: Date) -> Result<RangeRates, Error> {
        Ok(Default::default())
    }
}
