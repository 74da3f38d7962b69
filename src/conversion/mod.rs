use crate::error::Error;
use crate::rates::Requester;
use crate::selection::SelectionPair;

use log::info;

pub const MISSING_SELECTION: &str = "Select both a FROM and TO country.";
pub const INVALID_AMOUNT: &str = "Enter a valid amount.";
pub const RATE_NOT_AVAILABLE: &str = "Rate not available.";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConversionResult {
    pub rate: f64,
    pub result: f64,
}

/// Validated input of one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Checks the selection and the amount field; no request is issued when this fails.
    pub fn from_selection(pair: &SelectionPair, amount_text: &str) -> Result<Self, Error> {
        let (from, to) = pair
            .both()
            .ok_or_else(|| Error::new_input(MISSING_SELECTION))?;
        let amount = parse_amount(amount_text)?;
        Ok(Self {
            from: from.currency.clone(),
            to: to.currency.clone(),
            amount,
        })
    }
}

pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::new_input(INVALID_AMOUNT)),
    }
}

pub fn convert<R>(requester: &R, request: &ConversionRequest) -> Result<ConversionResult, Error>
where
    R: Requester + ?Sized,
{
    info!(
        "convert {} {} to {}",
        request.amount, request.from, request.to
    );
    let rates = requester.latest(&request.from, &request.to)?;
    let rate = rates
        .rate(&request.to)
        .ok_or_else(|| Error::new_rate(RATE_NOT_AVAILABLE))?;
    let result = request.amount * rate;
    info!(
        "convert {} {} to {} done rate:{} result:{}",
        request.amount, request.from, request.to, rate, result
    );
    Ok(ConversionResult { rate, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::Date;
    use crate::error::ErrorKind;
    use crate::marketdata::CountrySelection;
    use crate::rates::{LatestRates, RangeRates};
    use assert_float_eq::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FixedRequester {
        rates: Vec<(&'static str, f64)>,
        calls: Cell<usize>,
    }

    impl Requester for FixedRequester {
        fn latest(&self, _from: &str, _to: &str) -> Result<LatestRates, Error> {
            self.calls.set(self.calls.get() + 1);
            let rates: HashMap<String, f64> = self
                .rates
                .iter()
                .map(|(currency, rate)| (currency.to_string(), *rate))
                .collect();
            Ok(LatestRates { rates })
        }

        fn range(&self, _from: &str, _to: &str, _begin: Date, _end: Date) -> Result<RangeRates, Error> {
            Ok(Default::default())
        }
    }

    #[test]
    fn parse_amount_values() {
        assert_float_absolute_eq!(parse_amount("10").unwrap(), 10.0, 1e-12);
        assert_float_absolute_eq!(parse_amount(" 2.5 ").unwrap(), 2.5, 1e-12);

        // trailing text is not truncated to its numeric prefix
        for text in ["-5", "0", "", "abc", "10abc", "inf", "NaN"] {
            let error = parse_amount(text).unwrap_err();
            assert_eq!(error.kind, ErrorKind::Input);
            assert_eq!(error.message, INVALID_AMOUNT);
        }
    }

    #[test]
    fn request_needs_both_sides() {
        let mut pair = SelectionPair::new();
        pair.click(CountrySelection::new("United States", "USD"));
        let error = ConversionRequest::from_selection(&pair, "10").unwrap_err();
        assert_eq!(error.message, MISSING_SELECTION);
    }

    #[test]
    fn request_from_selection() {
        let mut pair = SelectionPair::new();
        pair.click(CountrySelection::new("United States", "USD"));
        pair.click(CountrySelection::new("France", "EUR"));
        let request = ConversionRequest::from_selection(&pair, "10").unwrap();
        assert_eq!(request.from, "USD");
        assert_eq!(request.to, "EUR");
        assert_float_absolute_eq!(request.amount, 10.0, 1e-12);

        let error = ConversionRequest::from_selection(&pair, "-5").unwrap_err();
        assert_eq!(error.message, INVALID_AMOUNT);
    }

    #[test]
    fn convert_ok() {
        let requester = make_requester_(vec![("EUR", 0.9)]);
        let result = convert(&requester, &make_request_("USD", "EUR", 10.0)).unwrap();
        assert_float_absolute_eq!(result.rate, 0.9, 1e-12);
        assert_float_absolute_eq!(result.result, 9.0, 1e-9);
        assert_eq!(requester.calls.get(), 1);
    }

    #[test]
    fn convert_missing_rate() {
        let requester = make_requester_(vec![("GBP", 0.8)]);
        let error = convert(&requester, &make_request_("USD", "EUR", 10.0)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Rate);
        assert_eq!(error.message, RATE_NOT_AVAILABLE);
    }

    fn make_requester_(rates: Vec<(&'static str, f64)>) -> FixedRequester {
        FixedRequester {
            rates,
            calls: Cell::new(0),
        }
    }

    fn make_request_(from: &str, to: &str, amount: f64) -> ConversionRequest {
        ConversionRequest {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }
}
