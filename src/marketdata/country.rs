use serde::Deserialize;

/// One country pin and the currency it trades in.
///
/// Never mutated once built: a new selection replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountrySelection {
    pub country: String,
    pub currency: String,
}

impl CountrySelection {
    pub fn new<C: Into<String>, K: Into<String>>(country: C, currency: K) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.country, self.currency)
    }
}
